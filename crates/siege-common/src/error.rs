//! Error types and utilities for SiegeBot

use thiserror::Error;

/// Result type alias for SiegeBot operations
pub type Result<T> = std::result::Result<T, SiegeError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for SiegeBot operations
#[derive(Error, Debug)]
pub enum SiegeError {
    /// Configuration related errors, including a missing API credential
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// Failures talking to the upstream stats API: transport errors,
    /// timeouts and non-success HTTP statuses
    #[error("Upstream API error: {message}")]
    Upstream {
        /// Human readable description
        message: String,
        /// HTTP status returned by the upstream, when one was received
        status_code: Option<u16>,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },
}

impl SiegeError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new upstream error
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream {
            message: msg.into(),
            status_code: None,
            source: None,
        }
    }

    /// Create a new upstream error carrying the HTTP status
    pub fn upstream_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Upstream {
            message: msg.into(),
            status_code: Some(status),
            source: None,
        }
    }

    /// Create a new upstream error with source
    pub fn upstream_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Upstream {
            message: msg.into(),
            status_code: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether this error came from the upstream stats API
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Whether this error is a configuration problem
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// HTTP status attached to an upstream error
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

/// Convert from reqwest::Error to SiegeError
impl From<reqwest::Error> for SiegeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::upstream_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::upstream_with_source("Connection failed", err)
        } else if let Some(status) = err.status() {
            Self::Upstream {
                message: format!("HTTP error: {}", status.as_u16()),
                status_code: Some(status.as_u16()),
                source: Some(Box::new(err)),
            }
        } else {
            Self::upstream_with_source("Network request failed", err)
        }
    }
}

/// Convert from toml::de::Error to SiegeError
impl From<toml::de::Error> for SiegeError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = SiegeError::config("missing api key");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.is_config());

        let upstream_error = SiegeError::upstream_with_status("API returned 404 Not Found", 404);
        assert!(upstream_error.to_string().contains("Upstream API error"));
        assert!(upstream_error.is_upstream());
        assert_eq!(upstream_error.status_code(), Some(404));

        let validation_error = SiegeError::validation_field("Invalid input", "platform");
        assert!(validation_error.to_string().contains("Validation error"));
        assert_eq!(validation_error.status_code(), None);
    }

    #[test]
    fn test_error_with_source() {
        let wrapped = SiegeError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(wrapped.to_string().contains("Config loading failed"));
        assert!(wrapped.source().is_some());

        let upstream = SiegeError::upstream_with_source(
            "Connection failed",
            io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        );
        assert!(upstream.source().is_some());
        assert_eq!(upstream.status_code(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let siege_error: SiegeError = io_error.into();

        assert!(siege_error.to_string().contains("I/O error"));
        assert!(siege_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
        let siege_error: SiegeError = serde_error.into();

        assert!(siege_error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("this is = = not toml").unwrap_err();
        let siege_error: SiegeError = toml_error.into();

        assert!(siege_error.is_config());
        assert!(siege_error.to_string().contains("TOML parsing error"));
    }

    #[test]
    fn test_error_display_formatting() {
        assert_eq!(
            SiegeError::config("missing field").to_string(),
            "Configuration error: missing field"
        );
        assert_eq!(
            SiegeError::upstream("timed out").to_string(),
            "Upstream API error: timed out"
        );
    }
}
