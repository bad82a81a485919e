//! Decision API client.
//!
//! `DecisionClient` turns visitor ids, campaign ids and context into one of
//! three POST requests and hands them to an injected [`HttpTransport`]. It
//! never inspects the response or translates errors: whatever the
//! transport returns is returned as is.
//!
//! # Example
//!
//! ```ignore
//! use flagship::{DecisionClient, ReqwestTransport, VisitorContext};
//!
//! let client = DecisionClient::new(
//!     "https://decision.flagship.io/v2",
//!     "my-env-id",
//!     ReqwestTransport::new()?,
//! )?;
//! let context = VisitorContext::new().with("plan", "premium");
//! let response = client.request_all_campaigns("visitor-1", &context).await?;
//! println!("{}", response.text().await?);
//! ```

use serde_json::Value;

use crate::api::payload::{ActivationBody, AllCampaignsBody, SingleCampaignBody};
use crate::api::RequestParameters;
use crate::context::Context;
use crate::error::ConfigurationError;
use crate::transport::{HttpTransport, Method, RequestOptions};
use crate::url::{
    replace_named_parameter, with_mode_query, ACTIVATION_TEMPLATE, ALL_CAMPAIGNS_TEMPLATE,
    SINGLE_CAMPAIGN_TEMPLATE,
};

/// A fully built request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRequest {
    pub method: Method,
    pub url: String,
    pub body: Value,
}

/// Client for the decision API.
///
/// Lookups may run concurrently through a shared reference. Replacing the
/// request parameters needs `&mut self`; callers sharing a client across
/// tasks must coordinate that themselves.
#[derive(Debug, Clone)]
pub struct DecisionClient<T> {
    base_url: String,
    environment_id: String,
    transport: T,
    request_parameters: RequestParameters,
}

impl<T: HttpTransport> DecisionClient<T> {
    /// Create a client for one environment.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `base_url` or `environment_id` is
    /// empty.
    pub fn new(
        base_url: impl Into<String>,
        environment_id: impl Into<String>,
        transport: T,
    ) -> Result<Self, ConfigurationError> {
        let base_url = base_url.into();
        let environment_id = environment_id.into();

        if base_url.is_empty() {
            return Err(ConfigurationError::InvalidConfiguration(
                "base URL must not be empty".into(),
            ));
        }

        if environment_id.is_empty() {
            return Err(ConfigurationError::InvalidConfiguration(
                "environment id must not be empty".into(),
            ));
        }

        Ok(Self {
            base_url,
            environment_id,
            transport,
            request_parameters: RequestParameters::default(),
        })
    }

    pub fn set_request_parameters(&mut self, request_parameters: RequestParameters) {
        self.request_parameters = request_parameters;
    }

    #[must_use]
    pub const fn request_parameters(&self) -> &RequestParameters {
        &self.request_parameters
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the decision for one campaign.
    ///
    /// # Errors
    /// Propagates the transport's error unchanged.
    pub async fn request_single_campaign(
        &self,
        visitor_id: &str,
        campaign_id: &str,
        context: &impl Context,
    ) -> Result<T::Response, T::Error> {
        let request = self.single_campaign_request(visitor_id, campaign_id, context);
        self.send(request).await
    }

    /// Fetch the decisions for every campaign of the environment.
    ///
    /// # Errors
    /// Propagates the transport's error unchanged.
    pub async fn request_all_campaigns(
        &self,
        visitor_id: &str,
        context: &impl Context,
    ) -> Result<T::Response, T::Error> {
        let request = self.all_campaigns_request(visitor_id, context);
        self.send(request).await
    }

    /// Report that a visitor was exposed to a variation.
    ///
    /// # Errors
    /// Propagates the transport's error unchanged.
    pub async fn request_campaign_activation(
        &self,
        visitor_id: &str,
        variation_group_id: &str,
        variation_id: &str,
    ) -> Result<T::Response, T::Error> {
        let request =
            self.campaign_activation_request(visitor_id, variation_group_id, variation_id);
        self.send(request).await
    }

    /// Hand a built request to the transport.
    ///
    /// # Errors
    /// Propagates the transport's error unchanged.
    pub async fn send(&self, request: DecisionRequest) -> Result<T::Response, T::Error> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            environment_id = %self.environment_id,
            "dispatching decision request"
        );

        self.transport
            .request(request.method, &request.url, RequestOptions { json: request.body })
            .await
    }
}

impl<T> DecisionClient<T> {
    #[must_use]
    pub fn single_campaign_request(
        &self,
        visitor_id: &str,
        campaign_id: &str,
        context: &impl Context,
    ) -> DecisionRequest {
        let url = replace_named_parameter(
            SINGLE_CAMPAIGN_TEMPLATE,
            &[
                ("baseUrl", self.base_url.as_str()),
                ("environmentId", self.environment_id.as_str()),
                ("campaignId", campaign_id),
            ],
        );

        let params = &self.request_parameters;
        let body = SingleCampaignBody {
            visitor_id,
            decision_group: params.decision_group(),
            format_response: params.is_format_response_enabled(),
            trigger_hit: params.is_trigger_hit_enabled(),
            context: context.export(),
        };

        DecisionRequest {
            method: Method::POST,
            url: self.apply_mode(url),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn all_campaigns_request(
        &self,
        visitor_id: &str,
        context: &impl Context,
    ) -> DecisionRequest {
        let url = replace_named_parameter(
            ALL_CAMPAIGNS_TEMPLATE,
            &[
                ("baseUrl", self.base_url.as_str()),
                ("environmentId", self.environment_id.as_str()),
            ],
        );

        let params = &self.request_parameters;
        let body = AllCampaignsBody {
            visitor_id,
            decision_group: params.decision_group(),
            trigger_hit: params.is_trigger_hit_enabled(),
            context: context.export(),
        };

        DecisionRequest {
            method: Method::POST,
            url: self.apply_mode(url),
            body: body.into(),
        }
    }

    /// Activation ignores the request parameters entirely.
    #[must_use]
    pub fn campaign_activation_request(
        &self,
        visitor_id: &str,
        variation_group_id: &str,
        variation_id: &str,
    ) -> DecisionRequest {
        let url =
            replace_named_parameter(ACTIVATION_TEMPLATE, &[("baseUrl", self.base_url.as_str())]);

        let body = ActivationBody {
            vid: visitor_id,
            cid: &self.environment_id,
            caid: variation_group_id,
            vaid: variation_id,
        };

        DecisionRequest {
            method: Method::POST,
            url,
            body: body.into(),
        }
    }

    fn apply_mode(&self, url: String) -> String {
        if self.request_parameters.is_default_mode() {
            url
        } else {
            with_mode_query(url, self.request_parameters.mode().as_str())
        }
    }
}
