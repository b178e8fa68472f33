//! HTTP server module
//!
//! - Axum router with the caption endpoints
//! - Request handlers and JSON error bodies
//! - Request logging and CORS middleware

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
