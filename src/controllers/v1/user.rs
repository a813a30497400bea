use actix_web::Responder;
use actix_web::web::{Data, Json};
use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::errors::{Error, ErrorResponse};
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::user::UserStoreRequest;
use crate::responses::v1::Created;
use crate::responses::v1::user::UserResponse;
use crate::security::PasswordHasher;
use crate::services;

/// Register a new user
///
/// Fail if
/// - a field is missing or malformed
/// - email already exist
/// - id already exist
#[utoipa::path(
    tag = "User",
    request_body = UserStoreRequest,
    responses(
        (status = 201, description = "User registered", body = Created),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Email or id already exists", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
)]
#[post("/api/users")]
pub async fn store(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    config: Data<AuthConfig>,
    Json(request): Json<UserStoreRequest>,
) -> Result<impl Responder, Error> {
    services::v1::user::store::store(&db, &hasher, &config, request).await
}

/// Fetch the user owning the bearer token
///
/// Fail if token is missing, unknown or expired
#[utoipa::path(
    tag = "User",
    security(("token" = [])),
    responses(
        (status = 200, description = "Authenticated user", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
)]
#[get("/api/users")]
pub async fn show(auth: Auth) -> Result<impl Responder, Error> {
    services::v1::auth::authenticated::authenticated(auth).await
}
