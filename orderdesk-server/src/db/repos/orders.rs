//! Order repository

use sqlx::PgPool;

use crate::models::{Order, OrderFields, OrderInput};
use super::DbError;

const ORDER_COLUMNS: &str =
    "ord_num, ord_amount, advance_amount, ord_date, cust_code, agent_code, ord_description";

/// Order repository
pub struct OrderRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every order, ordered by order number.
    pub async fn list(&self) -> Result<Vec<Order>, DbError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY ord_num");
        let rows = sqlx::query_as::<_, Order>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn get(&self, ord_num: i64) -> Result<Order, DbError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE ord_num = $1");
        sqlx::query_as::<_, Order>(&sql)
            .bind(ord_num)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("order", ord_num))
    }

    /// Insert an order whose number was already generated.
    pub async fn create(&self, order: &Order) -> Result<Order, DbError> {
        let sql = format!(
            r#"
            INSERT INTO orders ({ORDER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ORDER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Order>(&sql)
            .bind(order.ord_num)
            .bind(order.ord_amount)
            .bind(order.advance_amount)
            .bind(&order.ord_date)
            .bind(&order.cust_code)
            .bind(&order.agent_code)
            .bind(&order.ord_description)
            .fetch_one(self.pool)
            .await
            .map_err(|e| DbError::on_insert(e, "order", order.ord_num))
    }

    /// Overwrite every non-key column.
    pub async fn replace(&self, ord_num: i64, fields: &OrderFields) -> Result<Order, DbError> {
        let sql = format!(
            r#"
            UPDATE orders SET
                ord_amount = $2,
                advance_amount = $3,
                ord_date = $4,
                cust_code = $5,
                agent_code = $6,
                ord_description = $7
            WHERE ord_num = $1
            RETURNING {ORDER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Order>(&sql)
            .bind(ord_num)
            .bind(fields.ord_amount)
            .bind(fields.advance_amount)
            .bind(&fields.ord_date)
            .bind(&fields.cust_code)
            .bind(&fields.agent_code)
            .bind(&fields.ord_description)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("order", ord_num))
    }

    /// Overwrite only the columns present in `patch`.
    pub async fn patch(&self, ord_num: i64, patch: &OrderInput) -> Result<Order, DbError> {
        let sql = format!(
            r#"
            UPDATE orders SET
                ord_amount = COALESCE($2, ord_amount),
                advance_amount = COALESCE($3, advance_amount),
                ord_date = COALESCE($4, ord_date),
                cust_code = COALESCE($5, cust_code),
                agent_code = COALESCE($6, agent_code),
                ord_description = COALESCE($7, ord_description)
            WHERE ord_num = $1
            RETURNING {ORDER_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Order>(&sql)
            .bind(ord_num)
            .bind(patch.ord_amount)
            .bind(patch.advance_amount)
            .bind(&patch.ord_date)
            .bind(&patch.cust_code)
            .bind(&patch.agent_code)
            .bind(&patch.ord_description)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("order", ord_num))
    }

    pub async fn delete(&self, ord_num: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM orders WHERE ord_num = $1")
            .bind(ord_num)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("order", ord_num));
        }
        Ok(())
    }
}
