use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserUuid;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::RepositoryError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRecord {
    id: i64,
    uuid: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        User {
            id: UserId(r.id),
            uuid: UserUuid(r.uuid),
            name: r.name,
            email: r.email,
            password_hash: r.password_hash,
            created_at: r.created_at,
            modified_at: r.modified_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn add_user(&self, user: NewUser) -> Result<User, RepositoryError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (uuid, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, uuid, name, email, password_hash, created_at, modified_at
            "#,
        )
        .bind(user.uuid.0)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("users_uuid_key") {
                        return RepositoryError::Duplicate(user.uuid.to_string());
                    }
                    return RepositoryError::Duplicate(user.email.clone());
                }
            }
            database_error(e)
        })?;

        Ok(record.into())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, uuid, name, email, password_hash, created_at, modified_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(record.map(User::from))
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, uuid, name, email, password_hash, created_at, modified_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(record.map(User::from))
    }

    async fn get_user_by_uuid(&self, uuid: &UserUuid) -> Result<Option<User>, RepositoryError> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, uuid, name, email, password_hash, created_at, modified_at
            FROM users
            WHERE uuid = $1
            "#,
        )
        .bind(uuid.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(record.map(User::from))
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
