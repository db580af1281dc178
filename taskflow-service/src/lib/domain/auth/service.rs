use std::sync::Arc;

use async_trait::async_trait;
use auth::credentials;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::TokenError;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::models::LoginStatus;
use crate::domain::auth::models::RegisterStatus;
use crate::domain::auth::models::Session;
use crate::domain::auth::models::UserCredentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UserUuid;
use crate::user::ports::UserRepository;

/// Orchestrates login and registration over a user repository.
///
/// Holds no mutable state; one instance serves every request.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token issuer
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// First registration rule `input` breaks, checked name, email, password.
    fn validate(input: &UserCredentials) -> Option<RegisterStatus> {
        if !credentials::validate_name(&input.name) {
            return Some(RegisterStatus::InvalidName);
        }
        if !credentials::validate_email(&input.email) {
            return Some(RegisterStatus::InvalidEmail);
        }
        if !credentials::validate_password(&input.password) {
            return Some(RegisterStatus::InvalidPassword);
        }
        None
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, credentials: UserCredentials) -> Result<LoginOutcome, AuthError> {
        let user = match self
            .repository
            .get_user_by_email(&credentials.email)
            .await
            .map_err(AuthError::Lookup)?
        {
            Some(user) => user,
            None => {
                tracing::debug!("Login rejected: no user with this email");
                return Ok(LoginOutcome::rejected(LoginStatus::UserNotFound));
            }
        };

        let subject = user.uuid.to_string();
        match self
            .authenticator
            .authenticate(&credentials.password, &user.password_hash, &subject)
        {
            Ok(result) => {
                tracing::info!(user_uuid = %user.uuid, "User logged in");
                Ok(LoginOutcome::success(result.access_token))
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_uuid = %user.uuid, "Login rejected: wrong password");
                Ok(LoginOutcome::rejected(LoginStatus::InvalidCredentials))
            }
            Err(AuthenticationError::TokenError(e)) => Err(AuthError::TokenIssue(e)),
        }
    }

    async fn register(&self, credentials: UserCredentials) -> Result<RegisterStatus, AuthError> {
        let existing = self
            .repository
            .get_user_by_email(&credentials.email)
            .await
            .map_err(AuthError::Lookup)?;
        if existing.is_some() {
            tracing::debug!("Registration rejected: email already registered");
            return Ok(RegisterStatus::UserAlreadyExist);
        }

        let credentials = credentials.trimmed();

        if let Some(status) = Self::validate(&credentials) {
            tracing::debug!(status = %status, "Registration rejected");
            return Ok(status);
        }

        let password_hash = self
            .authenticator
            .hash_password(&credentials.password)
            .map_err(AuthError::Hashing)?;

        let new_user = NewUser {
            uuid: UserUuid::new(),
            name: credentials.name,
            email: credentials.email,
            password_hash,
        };

        match self.repository.add_user(new_user).await {
            Ok(user) => {
                tracing::info!(user_uuid = %user.uuid, user_id = %user.id, "User registered");
                Ok(RegisterStatus::Success)
            }
            Err(e) => Err(AuthError::Persist(e)),
        }
    }

    fn authenticate(&self, token: &str) -> Result<Session, TokenError> {
        let payload = self.authenticator.validate_token(token)?;

        let user_uuid = UserUuid::from_string(&payload.sub)
            .map_err(|e| TokenError::Invalid(format!("subject is not a user uuid: {}", e)))?;

        Ok(Session {
            user_uuid,
            token_id: payload.jti,
            expires_at: payload.exp,
        })
    }
}
