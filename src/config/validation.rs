// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for the connector's connection parameters.
//!
//! Validation is the gate in front of all network activity: a run with a
//! missing endpoint, token, or origin must abort here with a descriptive
//! error, never partway through a fetch. Validation also owns URI
//! normalization so the rest of the pipeline can assume its invariant.
//!
//! # Normalization
//!
//! `endpoint` and `origin` both tolerate a single trailing path separator in
//! the input (`"https://x/"` and `"https://x"` are equivalent). The separator
//! is stripped exactly once here, deterministically, so every downstream URI
//! composed from the endpoint is byte-identical regardless of the input form.

use crate::config::ConnectorConfig;
use crate::errors::ConfigurationError;

/// Validates presence of all required connection parameters and returns the
/// normalized configuration.
///
/// # Arguments
///
/// * `config` - The raw configuration as loaded
///
/// # Returns
///
/// * `Ok(ConnectorConfig)` - Validated configuration with `endpoint` and
///   `origin` stripped of any single trailing `/`
/// * `Err(ConfigurationError)` - The first missing parameter found, checked
///   in the order `endpoint`, `token`, `origin`
pub fn validate_connector_config(
    config: ConnectorConfig,
) -> Result<ConnectorConfig, ConfigurationError> {
    for (parameter, value) in [
        ("endpoint", &config.endpoint),
        ("token", &config.token),
        ("origin", &config.origin),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigurationError::MissingParameter {
                parameter: parameter.to_string(),
            });
        }
    }

    Ok(ConnectorConfig {
        endpoint: strip_trailing_separator(&config.endpoint),
        token: config.token,
        origin: strip_trailing_separator(&config.origin),
    })
}

/// Remove a single trailing `/` if present. Applied exactly once; a value
/// ending in `//` keeps one separator.
fn strip_trailing_separator(value: &str) -> String {
    match value.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str, token: &str, origin: &str) -> ConnectorConfig {
        ConnectorConfig {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            origin: origin.to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let validated =
            validate_connector_config(config("https://api.test", "T", "https://site.test"))
                .unwrap();
        assert_eq!(validated.endpoint, "https://api.test");
        assert_eq!(validated.token, "T");
        assert_eq!(validated.origin, "https://site.test");
    }

    #[test]
    fn test_missing_endpoint_is_rejected() {
        let err = validate_connector_config(config("", "T", "https://site.test")).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingParameter {
                parameter: "endpoint".to_string()
            }
        );
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let err =
            validate_connector_config(config("https://api.test", "", "https://site.test"))
                .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingParameter {
                parameter: "token".to_string()
            }
        );
    }

    #[test]
    fn test_whitespace_only_origin_is_rejected() {
        let err = validate_connector_config(config("https://api.test", "T", "   ")).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingParameter {
                parameter: "origin".to_string()
            }
        );
    }

    #[test]
    fn test_trailing_separator_is_stripped_exactly_once() {
        let with_slash =
            validate_connector_config(config("https://api.test/", "T", "https://site.test/"))
                .unwrap();
        let without_slash =
            validate_connector_config(config("https://api.test", "T", "https://site.test"))
                .unwrap();

        // Byte-identical downstream URIs regardless of input form.
        assert_eq!(with_slash, without_slash);

        let double_slash =
            validate_connector_config(config("https://api.test//", "T", "https://site.test"))
                .unwrap();
        assert_eq!(double_slash.endpoint, "https://api.test/");
    }
}
