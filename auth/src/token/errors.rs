use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to generate token id: {0}")]
    IdGenerationFailed(String),

    #[error("Failed to encrypt token: {0}")]
    EncryptionFailed(String),

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token is expired")]
    Expired,
}
