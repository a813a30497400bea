use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::responses::v1::SUCCESS;

/// Public view of a user, never carries the password hash
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[schema(example = "asa")]
    pub name: String,
    #[schema(example = "asa@gmail.com")]
    pub email: String,
    #[schema(example = "2024-03-01T00:00:00")]
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct UserResponse {
    #[schema(example = "Success")]
    pub message: String,
    pub data: User,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            message: SUCCESS.to_string(),
            data: user,
        }
    }
}

impl Responder for UserResponse {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
