//! Server configuration.

use crate::config::error::ConfigError;
use crate::config::parser::load_config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Status returned when a create is rejected. Anything but 201 satisfies
/// clients under test; 402 is what existing fixtures expect.
pub const DEFAULT_REJECT_STATUS: u16 = 402;

/// Prefix the groups routes are mounted under.
pub const DEFAULT_API_PREFIX: &str = "api/v2";

/// Mock server settings. Every field has a default, so an empty file is a
/// valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind; 0 picks an ephemeral port
    pub port: u16,
    /// Path prefix for every route
    pub api_prefix: String,
    /// Status for rejected creates
    pub reject_status: u16,
    /// First id handed out on create
    pub first_id: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            reject_status: DEFAULT_REJECT_STATUS,
            first_id: 1,
        }
    }
}

impl ServerConfig {
    /// Load and validate a config file (`.yaml`, `.yml`, `.json`, `.jsonc`).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(100..=599).contains(&self.reject_status) {
            return Err(ConfigError::Invalid {
                field: "reject_status",
                reason: format!("{} is not an HTTP status code", self.reject_status),
            });
        }
        if (200..300).contains(&self.reject_status) {
            return Err(ConfigError::Invalid {
                field: "reject_status",
                reason: "must not be a 2xx status".to_string(),
            });
        }
        if self.first_id < 1 {
            return Err(ConfigError::Invalid {
                field: "first_id",
                reason: "must be positive".to_string(),
            });
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "host",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parser::{parse_json, parse_yaml};
    use rstest::rstest;

    #[rstest]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_prefix, "api/v2");
        assert_eq!(config.reject_status, 402);
        assert_eq!(config.port, 0);
    }

    #[rstest]
    fn test_empty_document_uses_defaults() {
        let config: ServerConfig = parse_json("{}").expect("Should parse");
        assert_eq!(config, ServerConfig::default());
    }

    #[rstest]
    fn test_partial_yaml_overrides() {
        let config: ServerConfig =
            parse_yaml("port: 8089\napi_prefix: /zendesk/api/v2/\n").expect("Should parse");
        assert_eq!(config.port, 8089);
        assert_eq!(config.api_prefix, "/zendesk/api/v2/");
        assert_eq!(config.host, "127.0.0.1");
    }

    #[rstest]
    fn test_unknown_field_rejected() {
        let result: Result<ServerConfig, _> = parse_json(r#"{"prot": 1}"#);
        assert!(matches!(result.unwrap_err(), ConfigError::Json(_)));
    }

    #[rstest]
    #[case(201, "reject_status")]
    #[case(204, "reject_status")]
    #[case(42, "reject_status")]
    #[case(600, "reject_status")]
    fn test_invalid_reject_status(#[case] status: u16, #[case] field: &str) {
        let config = ServerConfig {
            reject_status: status,
            ..ServerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: f, .. } if f == field));
    }

    #[rstest]
    #[case(400)]
    #[case(402)]
    #[case(422)]
    #[case(500)]
    fn test_valid_reject_status(#[case] status: u16) {
        let config = ServerConfig {
            reject_status: status,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn test_invalid_first_id(#[case] first_id: i64) {
        let config = ServerConfig {
            first_id,
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid {
                field: "first_id",
                ..
            }
        ));
    }

    #[rstest]
    fn test_load_validates() {
        let path = std::env::temp_dir().join(format!(
            "zendesk-mock-core-{}-invalid.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "reject_status: 201\n").expect("Should write temp file");

        let result = ServerConfig::load(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Invalid {
                field: "reject_status",
                ..
            }
        ));
    }
}
