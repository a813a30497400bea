//! Integration tests for user-service
//!
//! Every test drives the actix service in-process against its own in-memory
//! database.

pub mod fetch_test;
pub mod register_test;
