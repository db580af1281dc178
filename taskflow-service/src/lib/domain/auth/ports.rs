use async_trait::async_trait;
use auth::TokenError;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::models::RegisterStatus;
use crate::domain::auth::models::Session;
use crate::domain::auth::models::UserCredentials;

/// Port for the authentication use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check credentials and issue a session token.
    ///
    /// # Arguments
    /// * `credentials` - Email and password; the name is ignored
    ///
    /// # Returns
    /// `Success` with a token, or `UserNotFound` / `InvalidCredentials`
    /// without one
    ///
    /// # Errors
    /// * `AuthError` - Lookup or token issuance failed
    async fn login(&self, credentials: UserCredentials) -> Result<LoginOutcome, AuthError>;

    /// Validate and store a new account.
    ///
    /// # Arguments
    /// * `credentials` - Name, email and password, trimmed before use
    ///
    /// # Returns
    /// `Success`, or the status of the first rule the input broke
    ///
    /// # Errors
    /// * `AuthError` - Lookup, hashing or persistence failed
    async fn register(&self, credentials: UserCredentials) -> Result<RegisterStatus, AuthError>;

    /// Verify a session token and resolve the identity it carries.
    ///
    /// # Errors
    /// * `Invalid` - Token is forged, malformed or names no valid user UUID
    /// * `Expired` - Token is past its expiry
    fn authenticate(&self, token: &str) -> Result<Session, TokenError>;
}
