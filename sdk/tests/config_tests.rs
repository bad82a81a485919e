//! Layered configuration loading (defaults, YAML, environment).

use figment::Jail;
use flagship::config::Config;
use flagship::Mode;

#[test]
fn loads_yaml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "flagship.yaml",
            r"
api:
  base_url: https://decision.example.com/v2
  environment_id: env-from-yaml
request:
  mode: simple
  decision_group: holdout
http:
  timeout_secs: 5
",
        )?;

        let config = Config::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.base_url, "https://decision.example.com/v2");
        assert_eq!(config.api.environment_id, "env-from-yaml");
        assert_eq!(config.request.mode, Mode::Simple);
        assert_eq!(config.request.decision_group.as_deref(), Some("holdout"));
        assert!(config.request.trigger_hit);
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn env_overrides_yaml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "flagship.yaml",
            r"
api:
  environment_id: env-from-yaml
request:
  mode: simple
",
        )?;
        jail.set_env("FLAGSHIP_API__ENVIRONMENT_ID", "env-from-env");
        jail.set_env("FLAGSHIP_REQUEST__MODE", "full");
        jail.set_env("FLAGSHIP_REQUEST__TRIGGER_HIT", "false");
        jail.set_env("FLAGSHIP_LOGGING__LEVEL", "debug");

        let config = Config::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.environment_id, "env-from-env");
        assert_eq!(config.request.mode, Mode::Full);
        assert!(!config.request.trigger_hit);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn env_only_without_yaml_file() {
    Jail::expect_with(|jail| {
        jail.set_env("FLAGSHIP_API__ENVIRONMENT_ID", "env-only");

        let config = Config::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.environment_id, "env-only");
        assert_eq!(config.api.base_url, "https://decision.flagship.io/v2");
        assert_eq!(config.http.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn custom_yaml_path() {
    Jail::expect_with(|jail| {
        jail.create_file("staging.yaml", "api:\n  environment_id: staging-env\n")?;

        let config = Config::load_from("staging.yaml").map_err(|e| e.to_string())?;
        assert_eq!(config.api.environment_id, "staging-env");
        Ok(())
    });
}

#[test]
fn missing_environment_id_is_rejected() {
    Jail::expect_with(|_jail| {
        let err = Config::load().expect_err("environment id is required");
        assert!(err.to_string().contains("api.environment_id"));
        Ok(())
    });
}

#[test]
fn unknown_mode_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FLAGSHIP_API__ENVIRONMENT_ID", "env");
        jail.set_env("FLAGSHIP_REQUEST__MODE", "verbose");

        assert!(Config::load().is_err());
        Ok(())
    });
}

#[test]
fn env_mode_is_case_insensitive() {
    Jail::expect_with(|jail| {
        jail.set_env("FLAGSHIP_API__ENVIRONMENT_ID", "env");
        jail.set_env("FLAGSHIP_REQUEST__MODE", "SIMPLE");

        let config = Config::load().map_err(|e| e.to_string())?;
        assert_eq!(config.request.mode, Mode::Simple);
        Ok(())
    });
}

#[test]
fn loaded_config_builds_client() {
    Jail::expect_with(|jail| {
        jail.set_env("FLAGSHIP_API__ENVIRONMENT_ID", "env-123");
        jail.set_env("FLAGSHIP_REQUEST__FORMAT_RESPONSE", "true");

        let config = Config::load().map_err(|e| e.to_string())?;
        let client = config.build_client().map_err(|e| e.to_string())?;
        assert_eq!(client.environment_id(), "env-123");
        assert!(client.request_parameters().is_format_response_enabled());
        Ok(())
    });
}
