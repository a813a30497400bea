pub mod app;
pub mod auth;
pub mod database;
pub mod observability;
pub mod security;
pub mod server;

use thiserror::Error;

pub use app::{ApiConfig, AppConfig, AppMetadata};
pub use auth::{Argon2Config, AuthConfig};
pub use database::DatabaseConfig;
pub use observability::{LogFormat, ObservabilityConfig};
pub use security::{CorsConfig, SecurityConfig};
pub use server::ServerConfig;

/// Prefix of environment variables overriding file configuration,
/// e.g. `USER_SERVICE__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "USER_SERVICE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Configuration section that can check its own invariants after loading.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from `.env`, files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
