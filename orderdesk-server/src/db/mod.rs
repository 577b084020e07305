//! Database layer - connection pool, repositories and stores
//!
//! # Design Principles
//!
//! - Connection pool (default 5 connections) shared through `PgStore`
//! - Every statement is parameterized; request input is never spliced into SQL
//! - Rely on the primary key for uniqueness, map violations to `Conflict`

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;
pub mod memory;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use store::{CompanyStore, OrderStore, PgStore, Store};
pub use memory::MemoryStore;
