//! Opaque bearer tokens.
//!
//! A token is the URL-safe, unpadded base64 form of the 16 bytes of a row id
//! in the `tokens` table. It carries no claims; validity is decided by looking
//! the row up.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,
    #[error("token is not valid base64")]
    Encoding,
    #[error("token has an invalid length")]
    Length,
}

pub fn encode(id: Uuid) -> String {
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

pub fn decode(token: &str) -> Result<Uuid, TokenError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(TokenError::Empty);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| TokenError::Encoding)?;

    Uuid::from_slice(&bytes).map_err(|_| TokenError::Length)
}
