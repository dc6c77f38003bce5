//! Timestamp Microservice
//!
//! Converts between human-readable dates, Unix epoch milliseconds and
//! RFC 1123 UTC strings over HTTP.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
