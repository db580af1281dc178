use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Shortest accepted token secret, in bytes.
pub const MIN_TOKEN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub duration_hours: i64,
}

impl TokenConfig {
    /// Lifetime of issued session tokens.
    ///
    /// # Errors
    /// * `ConfigError` - `duration_hours` does not fit a duration
    pub fn duration(&self) -> Result<chrono::Duration, ConfigError> {
        chrono::Duration::try_hours(self.duration_hours).ok_or_else(|| {
            ConfigError::Message(format!(
                "token.duration_hours {} is out of range",
                self.duration_hours
            ))
        })
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("duration_hours", &self.duration_hours)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, TOKEN__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// * `ConfigError` - A source is unreadable, a required key is missing,
    ///   or the token settings are unusable
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.http_port", 8080)?
            .set_default("database.max_connections", 5)?
            .set_default("token.duration_hours", 12)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Check settings the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.secret.len() < MIN_TOKEN_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "token.secret must be at least {} bytes",
                MIN_TOKEN_SECRET_LENGTH
            )));
        }

        if self.token.duration_hours <= 0 {
            return Err(ConfigError::Message(
                "token.duration_hours must be positive".to_string(),
            ));
        }
        self.token.duration()?;

        if self.database.max_connections == 0 {
            return Err(ConfigError::Message(
                "database.max_connections must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
