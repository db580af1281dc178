use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::domain::auth::models::LoginStatus;
use crate::domain::auth::models::RegisterStatus;
use crate::user::errors::RepositoryError;

/// Infrastructure fault that stopped a login or registration.
///
/// Expected rejections never use this type; they are reported as statuses.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("failed to look up user by email: {0}")]
    Lookup(#[source] RepositoryError),

    #[error("failed to hash password: {0}")]
    Hashing(#[source] PasswordError),

    #[error("failed to issue session token: {0}")]
    TokenIssue(#[source] TokenError),

    #[error("failed to save user: {0}")]
    Persist(#[source] RepositoryError),
}

impl AuthError {
    /// Status reported to a login caller for this fault.
    pub fn login_status(&self) -> LoginStatus {
        LoginStatus::Failure
    }

    /// Status reported to a registration caller for this fault.
    pub fn register_status(&self) -> RegisterStatus {
        RegisterStatus::Failure
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faults_report_failure_status() {
        let error = AuthError::Lookup(RepositoryError::Database("timeout".to_string()));

        assert_eq!(error.login_status(), LoginStatus::Failure);
        assert_eq!(error.register_status(), RegisterStatus::Failure);
    }

    #[test]
    fn test_message_names_the_failing_step() {
        let error = AuthError::Persist(RepositoryError::Database("disk full".to_string()));

        assert_eq!(
            error.to_string(),
            "failed to save user: Database error: disk full"
        );
    }
}
