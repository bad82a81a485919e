//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing of the decision API.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_decision_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_post("/env/campaigns")
//!         .respond_with_json(json!({"campaigns": []}))
//!         .mount()
//!         .await;
//!
//!     // Point a DecisionClient at server.url()
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the server, without trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub fn expect_post(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            mock: Mock::given(method("POST")).and(path(route)),
            response: ResponseTemplate::new(200),
            expected_calls: None,
        }
    }

    /// Assert every `expect_times` expectation was met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Raw bodies of all requests received so far, oldest first.
    pub async fn received_bodies(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }

    /// Full URLs of all requests received so far, oldest first.
    pub async fn received_urls(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| request.url.to_string())
            .collect()
    }
}

pub struct StubBuilder<'a> {
    server: &'a MockServer,
    mock: MockBuilder,
    response: ResponseTemplate,
    expected_calls: Option<u64>,
}

impl StubBuilder<'_> {
    #[must_use]
    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.mock = self.mock.and(header(name, value));
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: &'static str, value: &'static str) -> Self {
        self.mock = self.mock.and(query_param(key, value));
        self
    }

    /// Only match requests whose JSON body equals `expected` (key order ignored).
    #[must_use]
    pub fn with_json_body(mut self, expected: Value) -> Self {
        self.mock = self.mock.and(body_json(expected));
        self
    }

    #[must_use]
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.response = self.response.set_body_json(body);
        self
    }

    /// Replaces the whole response, so call it before `respond_with_json`.
    #[must_use]
    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.response = ResponseTemplate::new(status);
        self
    }

    #[must_use]
    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.response = self.response.set_delay(delay);
        self
    }

    #[must_use]
    pub fn expect_times(mut self, times: u64) -> Self {
        self.expected_calls = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut mock = self.mock.respond_with(self.response);
        if let Some(times) = self.expected_calls {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
