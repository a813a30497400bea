//! HTTP error type shared by every handler.
//!
//! Every variant renders as a JSON envelope with a human readable `message`
//! field; validation errors additionally carry the per-field messages under
//! `errors`.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::error::{BlockingError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(Validation),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

/// Body of every non-2xx response
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid email or password")]
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Per-field validation messages collected before touching the database
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    errors: BTreeMap<String, Vec<String>>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: ToString, M: ToString>(&mut self, field: F, message: M) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// `Ok(())` when nothing was collected, otherwise the collected errors
    pub fn check(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self))
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.values().flatten().next() {
            Some(first) => f.write_str(first),
            None => f.write_str("The given data was invalid"),
        }
    }
}

impl From<Validation> for Error {
    fn from(validation: Validation) -> Self {
        Error::Validation(validation)
    }
}

impl From<DbErr> for Error {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                ::tracing::warn!(detail = %detail, "Unique constraint violated");
                Error::Conflict("Resource already exists".to_string())
            }
            _ => {
                ::tracing::error!(error = %e, "Database error");
                Error::Internal("Database error".to_string())
            }
        }
    }
}

impl From<BlockingError> for Error {
    fn from(e: BlockingError) -> Self {
        ::tracing::error!(error = %e, "Blocking task failed");
        Error::Internal("Failed to process password".to_string())
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(e: argon2::password_hash::Error) -> Self {
        ::tracing::error!(error = %e, "Password hashing failed");
        Error::Internal("Failed to process password".to_string())
    }
}

impl Error {
    pub fn body(&self) -> ErrorResponse {
        let errors = match self {
            Error::Validation(validation) => validation.errors().clone(),
            _ => BTreeMap::new(),
        };

        ErrorResponse {
            message: self.to_string(),
            errors,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// `JsonConfig` error handler turning body parse failures into the envelope
pub fn json_error_handler(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    ::tracing::debug!(error = %err, "Rejected request body");

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {}", e),
        _ => "Invalid request body".to_string(),
    };

    Error::BadRequest(message).into()
}
