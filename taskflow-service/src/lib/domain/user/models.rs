use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::UserUuidError;

/// Registered user record.
///
/// `email` and `name` are stored exactly as they were after registration
/// trimmed them; `password_hash` is a self-describing Argon2 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Storage-assigned numeric user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Public user identifier, also the subject of issued session tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserUuid(pub Uuid);

impl UserUuid {
    /// Generate a new random user UUID.
    ///
    /// # Returns
    /// UserUuid with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user UUID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed UserUuid
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserUuidError> {
        Uuid::parse_str(s)
            .map(UserUuid)
            .map_err(|e| UserUuidError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record handed to the repository on registration.
///
/// The repository assigns `id` and both timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
