use milk_core::{AreaCode, MilkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("request for area code {code} timed out after {seconds}s")]
    Timeout { code: AreaCode, seconds: u64 },

    #[error("network error for area code {code}: {reason}")]
    Network { code: AreaCode, reason: String },

    #[error("listing service returned HTTP {status} for area code {code}")]
    HttpStatus { code: AreaCode, status: u16 },

    #[error("invalid URL template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl From<ScanError> for MilkError {
    fn from(err: ScanError) -> Self {
        MilkError::Scan(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
