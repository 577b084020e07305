//! In-process store
//!
//! Same semantics as the PostgreSQL store: lists ordered by key,
//! `NotFound` on unknown ids, `Conflict` on duplicate inserts.
//! Used by tests and `orderdesk serve --in-memory`.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Company, CompanyFields, CompanyInput, Order, OrderFields, OrderInput};
use super::repos::DbError;
use super::store::{CompanyStore, OrderStore};

#[derive(Default)]
pub struct MemoryStore {
    companies: RwLock<BTreeMap<String, Company>>,
    orders: RwLock<BTreeMap<i64, Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn list_companies(&self) -> Result<Vec<Company>, DbError> {
        Ok(self.companies.read().await.values().cloned().collect())
    }

    async fn get_company(&self, id: &str) -> Result<Company, DbError> {
        self.companies
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DbError::not_found("company", id))
    }

    async fn create_company(&self, company: Company) -> Result<Company, DbError> {
        match self.companies.write().await.entry(company.company_id.clone()) {
            Entry::Occupied(_) => Err(DbError::conflict("company", &company.company_id)),
            Entry::Vacant(slot) => Ok(slot.insert(company).clone()),
        }
    }

    async fn replace_company(&self, id: &str, fields: CompanyFields) -> Result<Company, DbError> {
        let mut companies = self.companies.write().await;
        let company = companies
            .get_mut(id)
            .ok_or_else(|| DbError::not_found("company", id))?;
        *company = Company::new(id, fields);
        Ok(company.clone())
    }

    async fn patch_company(&self, id: &str, patch: CompanyInput) -> Result<Company, DbError> {
        let mut companies = self.companies.write().await;
        let company = companies
            .get_mut(id)
            .ok_or_else(|| DbError::not_found("company", id))?;
        company.apply(&patch);
        Ok(company.clone())
    }

    async fn delete_company(&self, id: &str) -> Result<(), DbError> {
        self.companies
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("company", id))
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn list_orders(&self) -> Result<Vec<Order>, DbError> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn get_order(&self, ord_num: i64) -> Result<Order, DbError> {
        self.orders
            .read()
            .await
            .get(&ord_num)
            .cloned()
            .ok_or_else(|| DbError::not_found("order", ord_num))
    }

    async fn create_order(&self, order: Order) -> Result<Order, DbError> {
        match self.orders.write().await.entry(order.ord_num) {
            Entry::Occupied(_) => Err(DbError::conflict("order", order.ord_num)),
            Entry::Vacant(slot) => Ok(slot.insert(order).clone()),
        }
    }

    async fn replace_order(&self, ord_num: i64, fields: OrderFields) -> Result<Order, DbError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&ord_num)
            .ok_or_else(|| DbError::not_found("order", ord_num))?;
        *order = Order::new(ord_num, fields);
        Ok(order.clone())
    }

    async fn patch_order(&self, ord_num: i64, patch: OrderInput) -> Result<Order, DbError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(&ord_num)
            .ok_or_else(|| DbError::not_found("order", ord_num))?;
        order.apply(&patch);
        Ok(order.clone())
    }

    async fn delete_order(&self, ord_num: i64) -> Result<(), DbError> {
        self.orders
            .write()
            .await
            .remove(&ord_num)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("order", ord_num))
    }
}
