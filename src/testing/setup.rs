use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::config::auth::{Argon2Config, AuthConfig};
use crate::entities::v1::users;
use crate::helpers::now;
use crate::security::password::PasswordHasher;

/// Password given to every user made by [`create_test_user`]
pub const PASSWORD: &str = "rahasia";

/// Returns an in-memory SQLite database with all migrations applied
///
/// Every call opens a new database, so tests never see each other's rows.
///
/// # Panics
/// Panics if the connection or a migration fails; a broken setup should fail fast.
pub async fn database() -> DatabaseConnection {
    crate::database::memory()
        .await
        .expect("Failed to prepare in-memory database")
}

/// Auth configuration with cheap Argon2 parameters
///
/// - memory_cost: 19456 KB instead of 64 MB
/// - time_cost: 1 iteration instead of 3
/// - parallelism: 1 lane instead of 4
pub fn auth_config() -> AuthConfig {
    AuthConfig {
        argon2: Argon2Config {
            memory_cost: 19456,
            time_cost: 1,
            parallelism: 1,
            hash_length: 32,
        },
        ..AuthConfig::default()
    }
}

/// Returns a PasswordHasher configured with [`auth_config`]
pub fn password_hasher() -> Result<PasswordHasher, argon2::password_hash::Error> {
    PasswordHasher::from_config(&auth_config())
}

/// Insert a user with a random email and [`PASSWORD`] as password
pub async fn create_test_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
) -> Result<users::Model, DbErr> {
    let id = Uuid::new_v4();
    let password = hasher
        .hash(PASSWORD)
        .map_err(|e| DbErr::Custom(format!("Failed to hash password: {}", e)))?;

    let user = users::Model {
        id,
        name: format!("user {}", id.simple()),
        email: format!("user.{}@example.com", id.simple()),
        password,
        created_at: now(),
        updated_at: now(),
    };

    user.store(db).await
}
