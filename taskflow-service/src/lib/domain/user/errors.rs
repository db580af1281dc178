use thiserror::Error;

/// Error for UserUuid parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserUuidError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error raised by user storage
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A uniqueness constraint rejected the write
    #[error("User already exists: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Top-level error for user account operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
