//! Record types and request bodies
//!
//! Rows deserialize straight from sqlx (`FromRow`) and serialize to the
//! JSON shape clients see.

pub mod validation;
pub mod company;
pub mod order;
pub mod ids;

pub use validation::ValidationError;
pub use company::{Company, CompanyFields, CompanyInput};
pub use order::{Order, OrderFields, OrderInput};
pub use ids::IdGenerator;
