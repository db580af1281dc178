use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenService;
use chrono::Duration;
use chrono::Utc;
use taskflow_service::domain::auth::service::AuthService;
use taskflow_service::domain::user::errors::RepositoryError;
use taskflow_service::domain::user::models::NewUser;
use taskflow_service::domain::user::models::User;
use taskflow_service::domain::user::models::UserId;
use taskflow_service::domain::user::models::UserUuid;
use taskflow_service::domain::user::ports::UserRepository;
use taskflow_service::domain::user::service::UserService;
use taskflow_service::inbound::http::router::create_router;

pub const TOKEN_SECRET: &[u8] = b"test-secret-key-for-token-encryption-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let repository = Arc::new(InMemoryUserRepository::default());
        let authenticator = Arc::new(Authenticator::new(TOKEN_SECRET));

        let auth_service = Arc::new(AuthService::new(Arc::clone(&repository), authenticator));
        let user_service = Arc::new(UserService::new(Arc::clone(&repository)));

        let router = create_router(auth_service, user_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(TOKEN_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response body
    pub async fn register(&self, name: &str, email: &str, password: &str) -> serde_json::Value {
        self.post("/auth/register")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response")
    }

    /// Log in and return the response body
    pub async fn login(&self, email: &str, password: &str) -> serde_json::Value {
        self.post("/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response")
    }

    /// Register then log in, returning the session token
    pub async fn register_and_login(&self, name: &str, email: &str, password: &str) -> String {
        self.register(name, email, password).await;
        let body = self.login(email, password).await;

        body["token"]
            .as_str()
            .expect("Login did not return a token")
            .to_string()
    }

    /// Seal a token under the server's key with an arbitrary lifetime
    pub fn token_for(&self, subject: &str, duration: Duration) -> String {
        self.token_service
            .create_token(subject, duration)
            .expect("Failed to create token")
    }
}

/// User repository held in memory, enforcing the same uniqueness rules as
/// the database schema
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add_user(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|existing| existing.email == user.email || existing.uuid == user.uuid)
        {
            return Err(RepositoryError::Duplicate(user.email));
        }

        let now = Utc::now();
        let id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        let stored = User {
            id: UserId(id),
            uuid: user.uuid,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            modified_at: now,
        };
        users.push(stored.clone());

        Ok(stored)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.find_by_email(email))
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn get_user_by_uuid(&self, uuid: &UserUuid) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.uuid == *uuid)
            .cloned())
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|user| user.id != id);

        Ok(users.len() < before)
    }
}
