use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const LOGIN_SUCCESS: &str = "Login berhasil";

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Token {
    #[schema(example = "BlgLnG-_Tv-KrjJD-DewmA")]
    pub token: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Authenticated {
    #[schema(example = "Login berhasil")]
    pub message: String,
    pub data: Token,
}

impl Authenticated {
    pub fn new(token: String) -> Self {
        Self {
            message: LOGIN_SUCCESS.to_string(),
            data: Token { token },
        }
    }
}

impl Responder for Authenticated {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
