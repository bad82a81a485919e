//! Error types raised by the SDK itself.
//!
//! Transport failures are not represented here: they reach the caller as the
//! transport's own error type.

use thiserror::Error;

/// Errors raised while setting up a client or loading its configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A required construction argument was missing or empty.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// A visitor context entry that is not of the form `key=value`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextParseError {
    #[error("context entry '{0}' is missing '='")]
    MissingSeparator(String),

    #[error("context entry '{0}' has an empty key")]
    EmptyKey(String),
}
