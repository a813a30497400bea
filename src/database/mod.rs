//! Database connector
//!
//! Opens the sea-orm connection pool described by [`DatabaseConfig`]. The
//! test variant connects to `database.test_url` (in-memory SQLite unless
//! configured otherwise) and always applies migrations, giving every caller
//! a fresh disposable schema.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use user_service_migration::{Migrator, MigratorTrait};

use crate::config::DatabaseConfig;

/// Connect to the application database, applying migrations when configured
#[::tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options(&config.url, config)).await?;

    if config.run_migrations {
        ::tracing::info!("Applying pending migrations");
        Migrator::up(&db, None).await?;
    }

    ::tracing::info!("Database connected");

    Ok(db)
}

/// Connect to the disposable test database and build the schema
pub async fn test(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options(&config.test_url, config)).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Fresh in-memory SQLite database with all migrations applied
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    test(&DatabaseConfig {
        test_url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    })
    .await
}

fn options(url: &str, config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(url.to_string());

    // Every pooled connection to `:memory:` would open its own empty database
    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);
    }

    options
        .connect_timeout(config.connect_timeout())
        .sqlx_logging(config.sqlx_logging);

    options
}
