use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserUuid;
use crate::user::errors::RepositoryError;
use crate::user::errors::UserError;

/// Port for user account operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve user by public identifier.
    ///
    /// # Arguments
    /// * `uuid` - User UUID
    ///
    /// # Returns
    /// User entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Repository` - Storage operation failed
    async fn get_user(&self, uuid: &UserUuid) -> Result<User, UserError>;

    /// Retrieve user by numeric identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Repository` - Storage operation failed
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Arguments
    /// * `id` - User ID to delete
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Repository` - Storage operation failed
    async fn delete_user(&self, id: UserId) -> Result<(), UserError>;
}

/// Persistence operations for user records.
///
/// Implementations must be safe for concurrent use. A uniqueness violation on
/// write is reported as `RepositoryError::Duplicate`, anything else as
/// `RepositoryError::Database`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user, assigning its id and timestamps.
    ///
    /// # Arguments
    /// * `user` - Record to insert
    ///
    /// # Returns
    /// The stored user
    ///
    /// # Errors
    /// * `Duplicate` - Email or UUID is already taken
    /// * `Database` - Database operation failed
    async fn add_user(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Retrieve user by exact email match.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Retrieve user by numeric identifier.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Retrieve user by public identifier.
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn get_user_by_uuid(&self, uuid: &UserUuid) -> Result<Option<User>, RepositoryError>;

    /// Remove user from storage.
    ///
    /// # Returns
    /// `true` if a row was deleted, `false` if no user had this id
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn delete_user(&self, id: UserId) -> Result<bool, RepositoryError>;
}
