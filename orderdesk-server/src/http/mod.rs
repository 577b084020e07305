//! HTTP server layer
//!
//! Axum server with:
//! - CORS (permissive by default)
//! - Request tracing and timeouts
//! - Graceful shutdown
//! - JSON error responses
//! - Swagger UI at /docs

pub mod server;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
