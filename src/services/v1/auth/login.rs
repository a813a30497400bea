use actix_web::web;
use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::entities::v1::users::Model;
use crate::errors::{Error, Validation};
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::Authenticated;
use crate::security::{PasswordHasher, token};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Create a new session
#[::tracing::instrument(skip(db, hasher, config, request), fields(email = %request.email))]
pub async fn login(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    config: &AuthConfig,
    request: LoginRequest,
) -> Result<Authenticated, Error> {
    let mut validation = Validation::new();
    let email = request.email.trim().to_lowercase();
    let password = request.password;

    if email.is_empty() {
        validation.add("email", "Email field is required");
    }

    if password.is_empty() {
        validation.add("password", "Password field is required");
    }

    validation.check()?;

    let user = match Model::find_by_email(db, &email).await? {
        Some(user) => user,
        None => {
            ::tracing::info!("Login rejected, unknown email");

            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
    };

    // Argon2 is CPU bound, keep it off the worker thread
    let hasher = hasher.clone();
    let hash = user.password.clone();
    let verified = web::block(move || hasher.verify(&password, &hash)).await??;

    if !verified {
        ::tracing::info!(user_id = %user.id, "Login rejected, wrong password");

        return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = user
        .generate_token(db, Some(config.token_lifetime()))
        .await?;

    ::tracing::info!(user_id = %user.id, token_id = %token.id, "User logged in");

    Ok(Authenticated::new(token::encode(token.id)))
}
