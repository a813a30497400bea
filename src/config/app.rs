use serde::{Deserialize, Serialize};

use super::{
    AuthConfig, ConfigError, DatabaseConfig, ENV_PREFIX, ObservabilityConfig, SecurityConfig,
    ServerConfig, Validate,
};

/// Top-level application configuration that aggregates all config modules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// HTTP server configuration (host, port, workers)
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration (connection urls, pool, migrations)
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication configuration (tokens, password rules, Argon2)
    #[serde(default)]
    pub auth: AuthConfig,
    /// Security configuration (CORS)
    #[serde(default)]
    pub security: SecurityConfig,
    /// Observability configuration (log level and format)
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// API documentation configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

/// API documentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Serve the OpenAPI document at `/api.json`
    #[serde(default = "default_openapi_enabled")]
    pub openapi_enabled: bool,
    /// Swagger UI path, only used with the `docs` feature
    #[serde(default = "default_swagger_path")]
    pub swagger_path: String,
}

fn default_app_name() -> String {
    "user-service".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_openapi_enabled() -> bool {
    true
}

fn default_swagger_path() -> String {
    "/docs".to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: default_environment(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            openapi_enabled: default_openapi_enabled(),
            swagger_path: default_swagger_path(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError(
                "app.environment cannot be empty".to_string(),
            ));
        }
        if self.shutdown_timeout == 0 {
            return Err(ConfigError::ValidationError(
                "app.shutdown_timeout must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.swagger_path.starts_with('/') {
            return Err(ConfigError::ValidationError(
                "api.swagger_path must start with '/'".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.security.validate()?;
        self.observability.validate()?;
        self.api.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: USER_SERVICE__SERVER__PORT=8080
/// 2. `.env` in the working directory (exported into the environment first)
/// 3. config/local.toml (git-ignored, developer overrides)
/// 4. config/{APP_ENV}.toml (development/testing/production)
/// 5. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    // A missing .env is fine, the process environment may already carry everything
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            ::tracing::warn!(error = %e, "Failed to read .env file");
        }
    }

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
