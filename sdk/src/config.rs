use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::api::{Mode, RequestParameters};
use crate::client::DecisionClient;
use crate::error::ConfigurationError;
use crate::transport::ReqwestTransport;

/// SDK configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. flagship.yaml file (if exists)
/// 3. Environment variables with `FLAGSHIP_` prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Decision API root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment id (required, no compiled-in default).
    #[serde(default)]
    pub environment_id: String,
}

/// Mirrors [`RequestParameters`], with the same defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestConfig {
    #[serde(default)]
    pub mode: Mode,

    #[serde(default = "default_true")]
    pub trigger_hit: bool,

    pub decision_group: Option<String>,

    #[serde(default)]
    pub format_response: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "https://decision.flagship.io/v2".to_string()
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            trigger_hit: default_true(),
            decision_group: None,
            format_response: false,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: default_base_url(),
                environment_id: String::new(),
            },
            request: RequestConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RequestConfig {
    #[must_use]
    pub fn to_parameters(&self) -> RequestParameters {
        let builder = RequestParameters::builder()
            .mode(self.mode)
            .trigger_hit(self.trigger_hit)
            .format_response(self.format_response);

        match &self.decision_group {
            Some(group) => builder.decision_group(group.clone()).build(),
            None => builder.build(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. flagship.yaml file (if exists)
    /// 3. Environment variables with `FLAGSHIP_` prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::load_from("flagship.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigurationError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("FLAGSHIP_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.api.environment_id.is_empty() {
            return Err(ConfigurationError::Validation(
                "api.environment_id is required. Set FLAGSHIP_API__ENVIRONMENT_ID environment variable or configure in flagship.yaml.".into(),
            ));
        }

        if self.api.base_url.is_empty() {
            return Err(ConfigurationError::Validation(
                "api.base_url cannot be empty".into(),
            ));
        }

        let base_url = &self.api.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigurationError::Validation(format!(
                "api.base_url '{base_url}' must start with http:// or https://"
            )));
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigurationError::Validation(
                "http.timeout_secs cannot be 0".into(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Build a reqwest-backed client with the configured request parameters.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the API
    /// settings are empty.
    pub fn build_client(&self) -> anyhow::Result<DecisionClient<ReqwestTransport>> {
        let transport = ReqwestTransport::with_timeout(self.timeout())?;
        let mut client = DecisionClient::new(
            self.api.base_url.clone(),
            self.api.environment_id.clone(),
            transport,
        )?;
        client.set_request_parameters(self.request.to_parameters());
        Ok(client)
    }
}
