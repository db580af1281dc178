use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error channel: a mismatch or an unreadable stored
/// hash is reported as `false`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Failed to gather salt entropy: {0}")]
    EntropyUnavailable(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
