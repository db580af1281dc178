//! Credential and session-token primitives
//!
//! Provides the building blocks of the authentication subsystem:
//! - Credential validation rules (email, name, password)
//! - Password hashing (Argon2id)
//! - Encrypted session token issuance and verification
//! - Authentication coordination
//!
//! Nothing here touches storage; services own their user records and adapt
//! these primitives.
//!
//! # Examples
//!
//! ## Credential Rules
//! ```
//! use auth::credentials;
//!
//! assert!(credentials::validate_email("alice@example.com"));
//! assert!(credentials::validate_name("alice"));
//! assert!(credentials::validate_password("pass_word1"));
//! assert!(!credentials::validate_password("password"));
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password1!").unwrap();
//! assert!(hasher.verify("my_password1!", &hash));
//! assert!(!hasher.verify("my_password1!", ""));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{TokenError, TokenService};
//! use chrono::Duration;
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = service.create_token("user123", Duration::hours(12)).unwrap();
//! let payload = service.verify_token(&token).unwrap();
//! assert_eq!(payload.sub, "user123");
//!
//! let expired = service.create_token("user123", Duration::seconds(-1)).unwrap();
//! assert_eq!(service.verify_token(&expired), Err(TokenError::Expired));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123!").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123!", &hash, "user123").unwrap();
//!
//! // Validate token
//! let payload = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(payload.sub, "user123");
//! ```

pub mod authenticator;
pub mod credentials;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenError;
pub use token::TokenPayload;
pub use token::TokenService;
