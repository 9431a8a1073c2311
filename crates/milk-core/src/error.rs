//! Core error types for milk.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.

use thiserror::Error;

/// Central error type for all milk operations.
///
/// Each variant represents an error from a specific subsystem, allowing
/// for clear error propagation and handling across crate boundaries.
#[derive(Error, Debug)]
pub enum MilkError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pattern definition errors (loading, compiling)
    #[error("pattern error: {0}")]
    Patterns(String),

    /// Scan setup errors (HTTP client, URL template)
    #[error("scan error: {0}")]
    Scan(String),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found at an explicitly requested path
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// I/O error reading config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `MilkError`.
pub type Result<T> = std::result::Result<T, MilkError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MilkError::Validation("empty area code list".to_string());
        assert_eq!(err.to_string(), "validation error: empty area code list");

        let err = ConfigError::NoConfigDir;
        assert_eq!(
            err.to_string(),
            "could not determine config directory (XDG base directories not available)"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "scanning.timeout_secs".to_string(),
            reason: "must be at least 1 second".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for scanning.timeout_secs: must be at least 1 second"
        );
    }

    #[test]
    fn test_error_from_config() {
        let config_err = ConfigError::NoConfigDir;
        let milk_err: MilkError = config_err.into();
        assert!(matches!(milk_err, MilkError::Config(_)));
    }
}
