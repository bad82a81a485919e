//! Client for the Flagship decision API.
//!
//! # Architecture
//!
//! - [`DecisionClient`] - builds the three request shapes and delegates I/O
//! - [`transport::HttpTransport`] - injected HTTP collaborator
//! - [`ReqwestTransport`] - real HTTP implementation using reqwest
//! - `transport::mock::MockTransport` - recorder for tests (behind `test-utils`)
//! - [`RequestParameters`] / [`Context`] - immutable inputs read per request
//!
//! The `cli` feature adds the `flagship` binary and the `telemetry` module;
//! without it the library pulls in no async runtime.
//!
//! Responses are never decoded: callers get back exactly what the transport
//! produced, including its errors.

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
#[cfg(feature = "cli")]
pub mod telemetry;
pub mod transport;
pub mod url;

pub use api::{Mode, RequestParameters};
pub use client::{DecisionClient, DecisionRequest};
pub use context::{Context, ContextValue, VisitorContext};
pub use error::{ConfigurationError, ContextParseError};
pub use transport::{HttpTransport, ReqwestTransport, RequestOptions};
