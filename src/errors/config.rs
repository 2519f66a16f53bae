// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur during connector configuration validation.
///
/// All variants are fatal: validation runs before any network activity, and a
/// failed validation aborts the entire run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A required connection parameter is missing or empty
    MissingParameter {
        /// The name of the missing parameter (`endpoint`, `token`, or `origin`)
        parameter: String,
    },
    /// The configuration file could not be read
    FileUnreadable {
        path: String,
        reason: String,
    },
    /// The configuration file could not be parsed as YAML
    ParseFailed {
        path: String,
        reason: String,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingParameter { parameter } => {
                write!(
                    f,
                    "Required connector option '{}' is missing or empty. \
                     Endpoint, token and origin must all be supplied in the connector configuration.",
                    parameter
                )
            }
            ConfigurationError::FileUnreadable { path, reason } => {
                write!(f, "Failed to read configuration file '{}': {}", path, reason)
            }
            ConfigurationError::ParseFailed { path, reason } => {
                write!(f, "Failed to parse configuration file '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
