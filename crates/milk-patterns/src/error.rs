//! Error types for the pattern subsystem.

use milk_core::{MilkError, Tier};
use thiserror::Error;

/// Errors that can occur while loading definitions or compiling patterns.
#[derive(Error, Debug)]
pub enum PatternError {
    /// Failed to read a definitions file
    #[error("failed to load definitions from {path}: {source}")]
    LoadError {
        /// Path to the definitions file
        path: String,
        /// Underlying error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to parse a definitions TOML file
    #[error("failed to parse definitions TOML in {path}: {source}")]
    ParseError {
        /// Path to the definitions file
        path: String,
        /// TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// A tier pattern failed to compile
    #[error("failed to compile {tier} pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Tier the pattern belongs to
        tier: Tier,
        /// Pattern source text
        pattern: String,
        /// Regex engine error
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// Definitions failed validation
    #[error("invalid definitions: {reason}")]
    ValidationError {
        /// Reason for validation failure
        reason: String,
    },

    /// Definitions directory not found
    #[error("definitions directory not found at {path}")]
    DirectoryNotFound {
        /// Expected directory path
        path: String,
    },
}

impl From<PatternError> for MilkError {
    fn from(err: PatternError) -> Self {
        MilkError::Patterns(err.to_string())
    }
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let source = fancy_regex::Regex::new("(unclosed").expect_err("invalid pattern");
        let err = PatternError::InvalidPattern {
            tier: Tier::Platinum,
            pattern: "(unclosed".to_string(),
            source: Box::new(source),
        };
        assert!(err
            .to_string()
            .starts_with("failed to compile Platinum pattern '(unclosed'"));
    }

    #[test]
    fn test_into_milk_error() {
        let err: MilkError = PatternError::DirectoryNotFound {
            path: "/etc/milk".to_string(),
        }
        .into();
        assert!(matches!(err, MilkError::Patterns(_)));
        assert_eq!(
            err.to_string(),
            "pattern error: definitions directory not found at /etc/milk"
        );
    }
}
