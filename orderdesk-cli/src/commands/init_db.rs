//! One-shot table creation

use anyhow::{Context, Result};
use clap::Parser;

use orderdesk_server::db::{create_pool, schema};

use crate::config::OrderdeskConfig;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the `company` and `orders` tables if they are missing, then exit.
pub async fn run_init_db(args: InitDbArgs, config: OrderdeskConfig) -> Result<()> {
    let url = args
        .database_url
        .or(config.database.url)
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or [database].url in config.toml")?;

    let pool = create_pool(&url)
        .await
        .context("Failed to create database pool")?;

    schema::ensure(&pool).await.context("Failed to create tables")?;
    pool.close().await;

    println!("company and orders tables ready");
    Ok(())
}
