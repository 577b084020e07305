//! Storage traits shared by the HTTP layer
//!
//! Handlers only see `dyn Store`. `PgStore` talks to PostgreSQL through the
//! repositories; `MemoryStore` keeps everything in process.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Company, CompanyFields, CompanyInput, Order, OrderFields, OrderInput};
use super::repos::{CompanyRepo, DbError, OrderRepo};

/// Company persistence
#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn list_companies(&self) -> Result<Vec<Company>, DbError>;
    async fn get_company(&self, id: &str) -> Result<Company, DbError>;
    async fn create_company(&self, company: Company) -> Result<Company, DbError>;
    async fn replace_company(&self, id: &str, fields: CompanyFields) -> Result<Company, DbError>;
    async fn patch_company(&self, id: &str, patch: CompanyInput) -> Result<Company, DbError>;
    async fn delete_company(&self, id: &str) -> Result<(), DbError>;
}

/// Order persistence
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<Order>, DbError>;
    async fn get_order(&self, ord_num: i64) -> Result<Order, DbError>;
    async fn create_order(&self, order: Order) -> Result<Order, DbError>;
    async fn replace_order(&self, ord_num: i64, fields: OrderFields) -> Result<Order, DbError>;
    async fn patch_order(&self, ord_num: i64, patch: OrderInput) -> Result<Order, DbError>;
    async fn delete_order(&self, ord_num: i64) -> Result<(), DbError>;
}

/// Everything the router needs
pub trait Store: CompanyStore + OrderStore {}

impl<T: CompanyStore + OrderStore> Store for T {}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PgStore {
    async fn list_companies(&self) -> Result<Vec<Company>, DbError> {
        CompanyRepo::new(&self.pool).list().await
    }

    async fn get_company(&self, id: &str) -> Result<Company, DbError> {
        CompanyRepo::new(&self.pool).get(id).await
    }

    async fn create_company(&self, company: Company) -> Result<Company, DbError> {
        CompanyRepo::new(&self.pool).create(&company).await
    }

    async fn replace_company(&self, id: &str, fields: CompanyFields) -> Result<Company, DbError> {
        CompanyRepo::new(&self.pool).replace(id, &fields).await
    }

    async fn patch_company(&self, id: &str, patch: CompanyInput) -> Result<Company, DbError> {
        CompanyRepo::new(&self.pool).patch(id, &patch).await
    }

    async fn delete_company(&self, id: &str) -> Result<(), DbError> {
        CompanyRepo::new(&self.pool).delete(id).await
    }
}

#[async_trait]
impl OrderStore for PgStore {
    async fn list_orders(&self) -> Result<Vec<Order>, DbError> {
        OrderRepo::new(&self.pool).list().await
    }

    async fn get_order(&self, ord_num: i64) -> Result<Order, DbError> {
        OrderRepo::new(&self.pool).get(ord_num).await
    }

    async fn create_order(&self, order: Order) -> Result<Order, DbError> {
        OrderRepo::new(&self.pool).create(&order).await
    }

    async fn replace_order(&self, ord_num: i64, fields: OrderFields) -> Result<Order, DbError> {
        OrderRepo::new(&self.pool).replace(ord_num, &fields).await
    }

    async fn patch_order(&self, ord_num: i64, patch: OrderInput) -> Result<Order, DbError> {
        OrderRepo::new(&self.pool).patch(ord_num, &patch).await
    }

    async fn delete_order(&self, ord_num: i64) -> Result<(), DbError> {
        OrderRepo::new(&self.pool).delete(ord_num).await
    }
}
