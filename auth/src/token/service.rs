use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Duration;
use chrono::Utc;
use rand_core::OsRng;
use rand_core::RngCore;
use ring::aead::Aad;
use ring::aead::LessSafeKey;
use ring::aead::Nonce;
use ring::aead::UnboundKey;
use ring::aead::CHACHA20_POLY1305;
use ring::aead::NONCE_LEN;
use ring::digest;

use super::errors::TokenError;
use super::payload::TokenPayload;

/// Prefix of every token; also bound into the ciphertext as associated data.
const TOKEN_HEADER: &str = "v1.local.";

/// Domain separation for deriving the cipher key from the configured secret.
const KEY_CONTEXT: &[u8] = b"taskflow session token key v1";

const KEY_LENGTH: usize = digest::SHA256_OUTPUT_LEN;

/// Issues and verifies session tokens.
///
/// A token is `v1.local.` followed by the base64url encoding of a random
/// nonce and the ChaCha20-Poly1305 sealed JSON payload. Without the key the
/// payload can be neither read nor altered; anything that fails to open
/// under the configured key is rejected.
pub struct TokenService {
    key: [u8; KEY_LENGTH],
    duration: Duration,
}

impl TokenService {
    /// Token lifetime used by [`TokenService::issue`] unless overridden.
    pub const DEFAULT_DURATION_HOURS: i64 = 12;

    /// Create a new token service with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Shared secret; the cipher key is derived from it
    ///
    /// # Returns
    /// TokenService issuing tokens valid for 12 hours
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes)
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let mut context = digest::Context::new(&digest::SHA256);
        context.update(KEY_CONTEXT);
        context.update(secret);

        let mut key = [0u8; KEY_LENGTH];
        key.copy_from_slice(context.finish().as_ref());

        Self {
            key,
            duration: Duration::hours(Self::DEFAULT_DURATION_HOURS),
        }
    }

    /// Set the lifetime of tokens produced by [`TokenService::issue`].
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Lifetime of tokens produced by [`TokenService::issue`].
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Issue a token for `subject` with the configured lifetime.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.create_token(subject, self.duration)
    }

    /// Create an encrypted token for `subject` valid for `duration`.
    ///
    /// # Arguments
    /// * `subject` - Identity carried in the `sub` field
    /// * `duration` - Validity window; may be negative
    ///
    /// # Returns
    /// Opaque token string suitable for a Bearer header
    ///
    /// # Errors
    /// * `IdGenerationFailed` - Token id could not be generated
    /// * `EncryptionFailed` - Nonce generation or sealing failed
    pub fn create_token(&self, subject: &str, duration: Duration) -> Result<String, TokenError> {
        let payload = TokenPayload::new(subject, duration)?;

        let mut sealed = serde_json::to_vec(&payload)
            .map_err(|e| TokenError::EncryptionFailed(e.to_string()))?;

        let mut nonce = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| TokenError::EncryptionFailed(format!("nonce generation failed: {}", e)))?;

        self.cipher()
            .and_then(|cipher| {
                cipher.seal_in_place_append_tag(
                    Nonce::assume_unique_for_key(nonce),
                    Aad::from(TOKEN_HEADER.as_bytes()),
                    &mut sealed,
                )
            })
            .map_err(|e| TokenError::EncryptionFailed(e.to_string()))?;

        let mut body = Vec::with_capacity(NONCE_LEN + sealed.len());
        body.extend_from_slice(&nonce);
        body.extend_from_slice(&sealed);

        Ok(format!("{}{}", TOKEN_HEADER, URL_SAFE_NO_PAD.encode(body)))
    }

    /// Verify a token and return its payload.
    ///
    /// # Errors
    /// * `Invalid` - Token is malformed or does not open under this key
    /// * `Expired` - Token opens but is past its expiry
    pub fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let payload = self.open(token)?;

        if payload.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(payload)
    }

    fn open(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let encoded = token
            .strip_prefix(TOKEN_HEADER)
            .ok_or_else(|| TokenError::Invalid("unknown token header".to_string()))?;

        let mut body = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        if body.len() < NONCE_LEN {
            return Err(TokenError::Invalid("token is truncated".to_string()));
        }

        let (nonce, sealed) = body.split_at_mut(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce)
            .map_err(|_| TokenError::Invalid("token nonce is malformed".to_string()))?;

        let cipher = self
            .cipher()
            .map_err(|e| TokenError::Invalid(e.to_string()))?;
        let plaintext = cipher
            .open_in_place(nonce, Aad::from(TOKEN_HEADER.as_bytes()), sealed)
            .map_err(|_| TokenError::Invalid("token authentication failed".to_string()))?;

        serde_json::from_slice(plaintext).map_err(|e| TokenError::Invalid(e.to_string()))
    }

    fn cipher(&self) -> Result<LessSafeKey, ring::error::Unspecified> {
        UnboundKey::new(&CHACHA20_POLY1305, &self.key).map(LessSafeKey::new)
    }
}
