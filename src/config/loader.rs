// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigurationError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Connection parameters for the upstream event-management API.
///
/// This struct represents the complete configuration for one connector run.
/// It is typically loaded from a YAML configuration file.
///
/// # Fields
/// * `endpoint` - Base URL of the upstream API (trailing separator optional)
/// * `token` - Opaque credential appended to request URIs as a query parameter
/// * `origin` - Value sent as the `Origin` header on every request
///
/// # Example
/// ```yaml
/// endpoint: "https://events.example.org"
/// token: "0123456789abcdef"
/// origin: "https://www.example.org"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub origin: String,
}

/// Load a connector configuration from a YAML file without validating it.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConnectorConfig, ConfigurationError> {
    let path_display = path.as_ref().display().to_string();

    let contents = fs::read_to_string(&path).map_err(|e| ConfigurationError::FileUnreadable {
        path: path_display.clone(),
        reason: e.to_string(),
    })?;

    serde_yaml::from_str(&contents).map_err(|e| ConfigurationError::ParseFailed {
        path: path_display,
        reason: e.to_string(),
    })
}

/// Load and validate a connector configuration in one step.
///
/// This is the preferred entry point: the returned configuration has passed
/// presence validation and endpoint/origin normalization, and is safe to hand
/// to the pipeline.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<ConnectorConfig, ConfigurationError> {
    let config = load_config(path)?;
    crate::config::validate_connector_config(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint: \"https://events.example.org\"\ntoken: \"abc123\"\norigin: \"https://www.example.org\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.endpoint, "https://events.example.org");
        assert_eq!(config.token, "abc123");
        assert_eq!(config.origin, "https://www.example.org");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("does-not-exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigurationError::FileUnreadable { .. }));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: [unclosed").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigurationError::ParseFailed { .. }));
    }

    #[test]
    fn test_load_and_validate_config_normalizes_endpoint() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint: \"https://events.example.org/\"\ntoken: \"abc123\"\norigin: \"https://www.example.org/\""
        )
        .unwrap();

        let config = load_and_validate_config(file.path()).unwrap();
        assert_eq!(config.endpoint, "https://events.example.org");
        assert_eq!(config.origin, "https://www.example.org");
    }
}
