//! Company repository
//!
//! One parameterized statement per operation. Writes return the stored row
//! with `RETURNING`, so handlers never re-select.

use sqlx::PgPool;

use crate::models::{Company, CompanyFields, CompanyInput};
use super::DbError;

/// Company repository
pub struct CompanyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CompanyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every company, ordered by id.
    pub async fn list(&self) -> Result<Vec<Company>, DbError> {
        let rows = sqlx::query_as::<_, Company>(
            r#"
            SELECT company_id, company_name, company_city
            FROM company
            ORDER BY company_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single company by id.
    pub async fn get(&self, id: &str) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            r#"
            SELECT company_id, company_name, company_city
            FROM company
            WHERE company_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("company", id))
    }

    /// Insert a company whose id was already generated.
    ///
    /// A duplicate id is reported as `DbError::Conflict`.
    pub async fn create(&self, company: &Company) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO company (company_id, company_name, company_city)
            VALUES ($1, $2, $3)
            RETURNING company_id, company_name, company_city
            "#,
        )
        .bind(&company.company_id)
        .bind(&company.company_name)
        .bind(&company.company_city)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::on_insert(e, "company", &company.company_id))
    }

    /// Overwrite every non-key column.
    pub async fn replace(&self, id: &str, fields: &CompanyFields) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE company SET
                company_name = $2,
                company_city = $3
            WHERE company_id = $1
            RETURNING company_id, company_name, company_city
            "#,
        )
        .bind(id)
        .bind(&fields.company_name)
        .bind(&fields.company_city)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("company", id))
    }

    /// Overwrite only the columns present in `patch`.
    pub async fn patch(&self, id: &str, patch: &CompanyInput) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE company SET
                company_name = COALESCE($2, company_name),
                company_city = COALESCE($3, company_city)
            WHERE company_id = $1
            RETURNING company_id, company_name, company_city
            "#,
        )
        .bind(id)
        .bind(&patch.company_name)
        .bind(&patch.company_city)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("company", id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM company WHERE company_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("company", id));
        }
        Ok(())
    }
}
