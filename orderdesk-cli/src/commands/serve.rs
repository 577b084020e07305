//! HTTP server command
//!
//! Runs the orderdesk API against PostgreSQL, or against an in-process
//! store with `--in-memory`.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use orderdesk_server::db::{create_pool_with_options, schema, MemoryStore, PgStore, Store};
use orderdesk_server::run_server;

use crate::config::{Backend, OrderdeskConfig, Overrides};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// IP address to bind to (default: 127.0.0.1)
    #[arg(long, env = "ORDERDESK_HOST")]
    pub host: Option<String>,

    /// Port to bind to (default: 3000)
    #[arg(long, short = 'p', env = "ORDERDESK_PORT")]
    pub port: Option<u16>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections (default: 5)
    #[arg(long, env = "ORDERDESK_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,

    /// Per-request timeout in seconds (default: 30)
    #[arg(long, env = "ORDERDESK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Create the company and orders tables if missing before serving
    #[arg(long)]
    pub init_schema: bool,

    /// Keep records in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    /// Only allow browser requests from localhost origins
    #[arg(long)]
    pub cors_localhost: bool,
}

impl ServeArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
            timeout_secs: self.timeout,
            init_schema: self.init_schema,
            cors_localhost: self.cors_localhost,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: OrderdeskConfig) -> Result<()> {
    let settings = config.resolve(args.overrides(), args.in_memory)?;

    let store: Arc<dyn Store> = match settings.backend {
        Backend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on exit");
            Arc::new(MemoryStore::new())
        }
        Backend::Postgres {
            url,
            max_connections,
            init_schema,
        } => {
            let pool = create_pool_with_options(&url, max_connections)
                .await
                .context("Failed to create database pool")?;

            if init_schema {
                schema::ensure(&pool)
                    .await
                    .context("Failed to create tables")?;
            }

            Arc::new(PgStore::new(pool))
        }
    };

    // Blocks until shutdown
    run_server(store, settings.server)
        .await
        .context("Server error")?;

    Ok(())
}
