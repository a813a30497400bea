use sea_orm::{DatabaseConnection, DbErr};

use crate::config;
use crate::entities::v1::users;
use crate::security::token;

/// Test database built from the loaded configuration's `database.test_url`
///
/// Falls back to the built-in defaults (in-memory SQLite) when no
/// configuration can be loaded.
pub async fn database() -> Result<DatabaseConnection, DbErr> {
    let config = config::load().map(|config| config.database).unwrap_or_default();

    crate::database::test(&config).await
}

/// Issue a non-expiring bearer token for `user`
pub async fn token(db: &DatabaseConnection, user: &users::Model) -> Result<String, DbErr> {
    let model = user.generate_token(db, None).await?;

    Ok(token::encode(model.id))
}

/// In-process actix service wired like the real server, plus its database
///
/// Uses a fresh in-memory database and cheap Argon2 parameters.
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let hasher = $crate::testing::setup::password_hasher()
            .expect("Failed to build password hasher");
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(hasher))
            .app_data(::actix_web::web::Data::new(
                $crate::testing::setup::auth_config(),
            ))
            .configure($crate::router::route)
            .configure($crate::router::docs(
                &$crate::config::ApiConfig::default(),
            ));

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
