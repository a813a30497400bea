use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, errors, requests, responses};

/// Registers the bearer scheme referenced as `token` by secured paths
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "User"),
        (name = "Health"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::user::store,
        controllers::v1::user::show,

        controllers::v1::auth::login,
        controllers::v1::auth::logout,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        requests::v1::auth::LoginRequest,
        requests::v1::user::UserStoreRequest,

        responses::v1::Success,
        responses::v1::Created,
        responses::v1::auth::Token,
        responses::v1::auth::Authenticated,
        responses::v1::user::User,
        responses::v1::user::UserResponse,

        errors::ErrorResponse,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
