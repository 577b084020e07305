//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues one parameterized statement
//! per call. Absent rows become `DbError::NotFound`, duplicate keys
//! `DbError::Conflict`.

pub mod companies;
pub mod orders;

pub use companies::CompanyRepo;
pub use orders::OrderRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: String },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn conflict(resource: &'static str, id: impl ToString) -> Self {
        Self::Conflict {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify an INSERT failure: unique violations become `Conflict`.
    pub(crate) fn on_insert(err: sqlx::Error, resource: &'static str, id: impl ToString) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::conflict(resource, id),
            _ => Self::Sqlx(err),
        }
    }
}
