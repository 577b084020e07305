//! orderdesk-server: company and order records over HTTP
//!
//! Exposes list/create/get/update/patch/delete for two flat tables
//! (`company`, `orders`) as a JSON API backed by PostgreSQL.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, Store};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
