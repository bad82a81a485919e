//! Options that shape decision requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Response mode requested from the decision API.
///
/// Anything other than [`Mode::Normal`] is sent as a `mode` query parameter.
/// Parsing ignores case everywhere: config files, env vars and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Simple,
    Full,
}

impl Mode {
    /// Wire representation used in the query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Simple => "simple",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode '{0}', expected one of: normal, simple, full")]
pub struct UnknownModeError(String);

impl FromStr for Mode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "simple" => Ok(Self::Simple),
            "full" => Ok(Self::Full),
            _ => Err(UnknownModeError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Immutable set of request options read on every request build.
///
/// Build one with [`RequestParameters::builder`]; the defaults are normal
/// mode, hit tracking on, no decision group, no response formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    mode: Mode,
    trigger_hit: bool,
    decision_group: Option<String>,
    format_response: bool,
}

impl Default for RequestParameters {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            trigger_hit: true,
            decision_group: None,
            format_response: false,
        }
    }
}

impl RequestParameters {
    #[must_use]
    pub fn builder() -> RequestParametersBuilder {
        RequestParametersBuilder {
            inner: Self::default(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_default_mode(&self) -> bool {
        self.mode == Mode::default()
    }

    /// Whether a decision request also counts as a tracking hit.
    #[must_use]
    pub const fn is_trigger_hit_enabled(&self) -> bool {
        self.trigger_hit
    }

    #[must_use]
    pub fn decision_group(&self) -> Option<&str> {
        self.decision_group.as_deref()
    }

    /// Only read by the single-campaign lookup.
    #[must_use]
    pub const fn is_format_response_enabled(&self) -> bool {
        self.format_response
    }
}

#[derive(Debug, Clone)]
pub struct RequestParametersBuilder {
    inner: RequestParameters,
}

impl RequestParametersBuilder {
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.inner.mode = mode;
        self
    }

    #[must_use]
    pub fn trigger_hit(mut self, enabled: bool) -> Self {
        self.inner.trigger_hit = enabled;
        self
    }

    #[must_use]
    pub fn decision_group(mut self, group: impl Into<String>) -> Self {
        self.inner.decision_group = Some(group.into());
        self
    }

    #[must_use]
    pub fn format_response(mut self, enabled: bool) -> Self {
        self.inner.format_response = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> RequestParameters {
        self.inner
    }
}
