use actix_web::Responder;
use actix_web::web::{Data, Json};
use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::errors::{Error, ErrorResponse};
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::Success;
use crate::responses::v1::auth::Authenticated;
use crate::security::PasswordHasher;
use crate::services;

/// Create a new session
///
/// Fail if:
/// - email not found
/// - password is incorrect
#[utoipa::path(
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = Authenticated),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    config: Data<AuthConfig>,
    Json(request): Json<LoginRequest>,
) -> Result<impl Responder, Error> {
    services::v1::auth::login::login(&db, &hasher, &config, request).await
}

/// Destroy current session
///
/// Fail if:
/// - token not found
/// - token is expired
#[utoipa::path(
    tag = "Auth",
    security(("token" = [])),
    responses(
        (status = 200, description = "Logged out", body = Success),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/logout")]
pub async fn logout(auth: Auth, db: Data<DatabaseConnection>) -> Result<impl Responder, Error> {
    services::v1::auth::logout::logout(auth, &db).await
}
