//! Error types for configuration loading.

use std::path::PathBuf;

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// Config file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Route pattern failed to compile
    #[error("Invalid route pattern: {0}")]
    Route(#[from] regex::Error),
    /// A value parsed but is not acceptable
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_config_error_json_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = ConfigError::from(json_err);
        assert!(error.to_string().contains("JSON parsing error"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_config_error_yaml_display() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("invalid: yaml: [").unwrap_err();
        let error = ConfigError::from(yaml_err);
        assert!(error.to_string().contains("YAML parsing error"));
        assert!(error.source().is_some());
    }

    #[rstest]
    #[case("test.txt")]
    #[case("unknown.extension")]
    #[case("")]
    fn test_config_error_unknown_file_type_display(#[case] path: &str) {
        let error = ConfigError::UnknownFileType(path.to_string());
        let display = error.to_string();
        assert!(display.contains("Unknown file type"));
        assert!(display.contains(path));
        assert!(error.source().is_none());
    }

    #[rstest]
    fn test_config_error_io_keeps_path_and_source() {
        let error = ConfigError::Io {
            path: PathBuf::from("/missing/mock.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.to_string().contains("/missing/mock.yaml"));
        assert!(error.source().is_some());
    }

    #[rstest]
    fn test_config_error_route_display() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error = ConfigError::from(regex_err);
        assert!(error.to_string().contains("Invalid route pattern"));
    }

    #[rstest]
    fn test_config_error_invalid_display() {
        let error = ConfigError::Invalid {
            field: "reject_status",
            reason: "must not be a 2xx status".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for `reject_status`: must not be a 2xx status"
        );
    }
}
