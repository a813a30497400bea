pub mod auth;
pub mod user;

use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SUCCESS: &str = "Success";

/// Plain `{"message": "Success"}` answered with 200
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Success {
    #[schema(example = "Success")]
    pub message: String,
}

/// Plain `{"message": "Success"}` answered with 201
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Created {
    #[schema(example = "Success")]
    pub message: String,
}

impl Default for Success {
    fn default() -> Self {
        Self {
            message: SUCCESS.to_string(),
        }
    }
}

impl Default for Created {
    fn default() -> Self {
        Self {
            message: SUCCESS.to_string(),
        }
    }
}

impl Responder for Success {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}

impl Responder for Created {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Created().json(self)
    }
}
