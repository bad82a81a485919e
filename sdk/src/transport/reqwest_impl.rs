use std::time::Duration;

use async_trait::async_trait;

use super::{HttpTransport, Method, RequestOptions};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `HttpTransport` backed by `reqwest`.
///
/// Non-2xx responses are returned as `Ok`, the caller decides what a status
/// means. Only connection-level failures (DNS, TLS, timeouts) surface as
/// `reqwest::Error`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a 30 second request timeout.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured `reqwest::Client` (proxies, headers, custom TLS).
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    type Response = reqwest::Response;
    type Error = reqwest::Error;

    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response, reqwest::Error> {
        tracing::debug!(%method, url, "sending decision API request");

        let response = self
            .client
            .request(method, url)
            .json(&options.json)
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), url, "decision API responded");
        Ok(response)
    }
}
