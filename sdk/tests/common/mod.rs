//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - wiremock wrapper for the reqwest transport
//! - [`fixtures`] - shared ids and a ready-made mock-backed client

#![allow(dead_code)]

pub mod http_mock;

pub mod fixtures {
    use flagship::transport::mock::MockTransport;
    use flagship::{DecisionClient, VisitorContext};

    pub const BASE_URL: &str = "https://fake-url-cj12clb73ggr1p9ie64h";
    pub const ENV_ID: &str = "my_environment_id";
    pub const VISITOR_ID: &str = "my_visitor_id";
    pub const CAMPAIGN_ID: &str = "my_campaign_id";
    pub const VARIATION_GROUP_ID: &str = "my_variation_group_id";
    pub const VARIATION_ID: &str = "my_variation_id";

    #[allow(clippy::expect_used)]
    pub fn mock_client() -> DecisionClient<MockTransport> {
        DecisionClient::new(BASE_URL, ENV_ID, MockTransport::new()).expect("valid client")
    }

    pub fn sample_context() -> VisitorContext {
        VisitorContext::new()
            .with("plan", "premium")
            .with("age", 31)
            .with("beta", true)
    }
}
