#[macro_use(get, post, delete)]
extern crate actix_web;

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod errors;
pub mod helpers;
pub mod logging;
pub mod middlewares;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use errors::{Error, ErrorResponse, Validation};
pub use middlewares::v1::auth::Auth;
pub use security::PasswordHasher;
