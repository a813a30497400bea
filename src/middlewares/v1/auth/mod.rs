use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::entities::v1::tokens;
use crate::errors::Error;
use crate::helpers::now;
use crate::responses::v1::user::User;
use crate::security::token;

const BEARER: &str = "Bearer";

/// Session resolved from the `Authorization: Bearer <token>` header
#[derive(Clone, Debug)]
pub struct Auth {
    /// Id of the token row the request presented
    pub id: Uuid,
    pub user: User,
}

/// Extract the token id from an `Authorization` header value
pub fn parse_bearer(header: Option<&str>) -> Result<Uuid, Error> {
    let header = header.ok_or_else(|| Error::Unauthorized("Missing authorization header".to_string()))?;

    // Scheme names are case-insensitive
    let token = match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case(BEARER) => token,
        _ => return Err(Error::Unauthorized("Invalid authorization header".to_string())),
    };

    token::decode(token).map_err(|e| {
        ::tracing::debug!(error = %e, "Failed to decode token");
        Error::Unauthorized("Invalid token".to_string())
    })
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let start = Instant::now();

        let db = match req.app_data::<Data<DatabaseConnection>>().cloned() {
            Some(db) => db,
            None => {
                return Box::pin(async move {
                    ::tracing::error!("Failed to get database connection");

                    Err(Error::Internal("Failed to get database connection".to_string()))
                });
            }
        };

        let header = match req.headers().get(AUTHORIZATION) {
            Some(header) => match header.to_str() {
                Ok(header) => Some(header.to_string()),
                Err(e) => {
                    ::tracing::debug!(error = %e, "Authorization header is not visible ASCII");

                    return Box::pin(async move {
                        Err(Error::Unauthorized("Invalid authorization header".to_string()))
                    });
                }
            },
            None => None,
        };

        let id = match parse_bearer(header.as_deref()) {
            Ok(id) => id,
            Err(e) => {
                return Box::pin(async move {
                    ::tracing::debug!(error = %e, "Rejected authorization header");

                    Err(e)
                });
            }
        };

        Box::pin(async move {
            let db: &DatabaseConnection = &db;

            let (token, user) = match tokens::Model::find_with_user(db, id).await? {
                Some(found) => found,
                None => {
                    ::tracing::debug!(token_id = %id, "Token not found");

                    return Err(Error::Unauthorized("Invalid token".to_string()));
                }
            };

            if token.is_expired_at(now()) {
                ::tracing::debug!(token_id = %id, "Token expired");

                // Expired tokens are deleted when presented
                tokens::Model::revoke(db, token.id).await?;

                return Err(Error::Unauthorized("Token expired".to_string()));
            }

            ::tracing::debug!(user_id = %user.id, "Authentication took: {:?}", start.elapsed());

            Ok(Auth {
                id: token.id,
                user: user.into(),
            })
        })
    }
}
