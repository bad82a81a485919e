//! HTTP transport abstraction.
//!
//! The client only shapes requests; sending them is delegated to an
//! [`HttpTransport`]. The trait enables:
//!
//! - Real HTTP calls through [`ReqwestTransport`]
//! - In-memory recording with [`mock::MockTransport`] in unit tests
//! - Bringing any other HTTP stack by implementing one method
//!
//! # Implementing the trait
//!
//! ```ignore
//! use async_trait::async_trait;
//! use flagship::transport::{HttpTransport, RequestOptions};
//! use reqwest::Method;
//!
//! struct MyTransport;
//!
//! #[async_trait]
//! impl HttpTransport for MyTransport {
//!     type Response = String;
//!     type Error = std::io::Error;
//!
//!     async fn request(
//!         &self,
//!         method: Method,
//!         url: &str,
//!         options: RequestOptions,
//!     ) -> Result<String, std::io::Error> {
//!         // send options.json to url
//!         Ok(String::new())
//!     }
//! }
//! ```

mod reqwest_impl;

pub use reqwest::Method;
pub use reqwest_impl::ReqwestTransport;

use async_trait::async_trait;
use serde_json::Value;

/// Options passed alongside a request. Only a JSON body is supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub json: Value,
}

/// Sends one HTTP request and hands back whatever the underlying stack
/// produced.
///
/// Implementations own every transport concern: status handling, timeouts,
/// retries, TLS and pooling. The client returns `Response` and `Error`
/// to its caller untouched.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    type Response: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Self::Response, Self::Error>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    type Response = T::Response;
    type Error = T::Error;

    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Self::Response, Self::Error> {
        (**self).request(method, url, options).await
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Recording transport for unit tests.

    use super::{HttpTransport, Method, RequestOptions};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    /// A request as seen by [`MockTransport`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub method: Method,
        pub url: String,
        pub json: Value,
    }

    /// Canned response handed back by [`MockTransport`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MockResponse {
        pub status: u16,
        pub body: Value,
    }

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("mock transport failure: {0}")]
    pub struct MockTransportError(pub String);

    /// Mock implementation of `HttpTransport` for unit tests.
    ///
    /// Every call is recorded. The configured response is shared through an
    /// `Arc`, so tests can check the client returned the very same value with
    /// `Arc::ptr_eq`. Use `fail_next` to make the next call error out.
    pub struct MockTransport {
        response: Mutex<Arc<MockResponse>>,
        next_error: Mutex<Option<MockTransportError>>,
        calls: Mutex<Vec<RecordedRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::with_response(MockResponse {
                status: 200,
                body: Value::Object(serde_json::Map::new()),
            })
        }

        pub fn with_response(response: MockResponse) -> Self {
            Self {
                response: Mutex::new(Arc::new(response)),
                next_error: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// The response every successful call returns.
        pub fn response(&self) -> Arc<MockResponse> {
            Arc::clone(&self.response.lock().unwrap())
        }

        pub fn set_response(&self, response: MockResponse) {
            *self.response.lock().unwrap() = Arc::new(response);
        }

        /// Make the next call fail with `error`.
        pub fn fail_next(&self, error: MockTransportError) {
            *self.next_error.lock().unwrap() = Some(error);
        }

        /// All requests received so far, oldest first.
        pub fn calls(&self) -> Vec<RecordedRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        type Response = Arc<MockResponse>;
        type Error = MockTransportError;

        async fn request(
            &self,
            method: Method,
            url: &str,
            options: RequestOptions,
        ) -> Result<Self::Response, Self::Error> {
            self.calls.lock().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                json: options.json,
            });

            if let Some(error) = self.next_error.lock().unwrap().take() {
                return Err(error);
            }

            Ok(self.response())
        }
    }
}
