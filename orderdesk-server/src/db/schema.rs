//! Table bootstrap
//!
//! Creates the two tables when they are missing. Existing tables are left
//! alone; there is no versioning.

use sqlx::PgPool;

/// Create `company` and `orders` if they do not exist yet.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring company and orders tables exist");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS company (
            company_id TEXT PRIMARY KEY,
            company_name TEXT NOT NULL DEFAULT '',
            company_city TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            ord_num BIGINT PRIMARY KEY,
            ord_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
            advance_amount DOUBLE PRECISION NOT NULL DEFAULT 0,
            ord_date TEXT NOT NULL DEFAULT '',
            cust_code TEXT NOT NULL DEFAULT '',
            agent_code TEXT NOT NULL DEFAULT '',
            ord_description TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema ready");
    Ok(())
}
