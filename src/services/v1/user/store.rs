use actix_web::web;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::config::auth::AuthConfig;
use crate::entities::v1::users::Model;
use crate::errors::{Error, Validation};
use crate::helpers::now;
use crate::requests::v1::user::UserStoreRequest;
use crate::responses::v1::Created;
use crate::security::{PasswordHasher, Validator};

/// Register a new user
#[::tracing::instrument(skip(db, hasher, config, request), fields(email = %request.email))]
pub async fn store(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    config: &AuthConfig,
    request: UserStoreRequest,
) -> Result<Created, Error> {
    let mut validation = Validation::new();
    let name = request.name.trim().to_string();
    let email = request.email.trim().to_lowercase();
    let password = request.password;
    let id = match request.id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(id) => match Uuid::parse_str(id) {
            Ok(id) => Some(id),
            Err(_) => {
                validation.add("id", "Id must be a valid UUID");
                None
            }
        },
    };

    if name.is_empty() {
        validation.add("name", "Name field is required");
    } else if !Validator::validate_name(&name) {
        validation.add("name", "Name is too long");
    }

    if email.is_empty() {
        validation.add("email", "Email field is required");
    } else if !Validator::validate_email(&email) {
        validation.add("email", "Email is invalid");
    }

    if password.is_empty() {
        validation.add("password", "Password field is required");
    } else if let Err(errors) = Validator::validate_password(&password, config.password_min_length) {
        for error in errors {
            validation.add("password", error);
        }
    }

    validation.check()?;

    if Model::email_exists(db, &email).await? {
        return Err(Error::Conflict("Email already exists".to_string()));
    }

    if let Some(id) = id {
        if Model::id_exists(db, id).await? {
            return Err(Error::Conflict("Id already exists".to_string()));
        }
    }

    let id = id.unwrap_or_else(Uuid::new_v4);

    ::tracing::debug!(user_id = %id, "Hashing password with Argon2id");
    let hasher = hasher.clone();
    let password = web::block(move || hasher.hash(&password)).await??;

    let created_at = now();
    let model = Model {
        id,
        name,
        email,
        password,
        created_at,
        updated_at: created_at,
    };

    // A concurrent registration can still win the race, the unique index turns it into a 409
    model.store(db).await?;

    ::tracing::info!(user_id = %id, "User created successfully");

    Ok(Created::default())
}
