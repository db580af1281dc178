use chrono::Duration;
use chrono::Utc;
use rand_core::OsRng;
use rand_core::RngCore;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::TokenError;

/// Session token payload.
///
/// Carries a unique token id, the subject identity and the validity window
/// as Unix timestamps (seconds). `exp` is always `iat` plus the duration the
/// token was issued with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPayload {
    /// Unique token identifier
    pub jti: Uuid,

    /// Subject (user identity)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenPayload {
    /// Build a payload for `subject` valid for `duration` from now.
    ///
    /// # Errors
    /// * `IdGenerationFailed` - The OS random source could not produce a token id
    pub fn new(subject: impl ToString, duration: Duration) -> Result<Self, TokenError> {
        let jti = generate_token_id()?;
        let iat = Utc::now().timestamp();

        Ok(Self {
            jti,
            sub: subject.to_string(),
            iat,
            exp: iat.saturating_add(duration.num_seconds()),
        })
    }

    /// Check if token is expired at the given Unix timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.exp
    }
}

fn generate_token_id() -> Result<Uuid, TokenError> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| TokenError::IdGenerationFailed(e.to_string()))?;

    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payload() {
        let payload = TokenPayload::new("user123", Duration::hours(12)).unwrap();

        assert_eq!(payload.sub, "user123");
        assert_eq!(payload.exp - payload.iat, 12 * 60 * 60);
        assert_eq!(payload.jti.get_version_num(), 4);
    }

    #[test]
    fn test_token_ids_are_unique() {
        let first = TokenPayload::new("user123", Duration::hours(1)).unwrap();
        let second = TokenPayload::new("user123", Duration::hours(1)).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_is_expired() {
        let payload = TokenPayload {
            jti: Uuid::nil(),
            sub: "user123".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!payload.is_expired(999));
        assert!(!payload.is_expired(1000)); // Exactly at expiration
        assert!(payload.is_expired(1001));
    }

    #[test]
    fn test_negative_duration_is_already_expired() {
        let payload = TokenPayload::new("user123", Duration::seconds(-1)).unwrap();

        assert!(payload.is_expired(Utc::now().timestamp()));
    }
}
