//! orderdesk CLI - serve the company/order JSON API
//!
//! - `orderdesk serve` runs the HTTP server (PostgreSQL or `--in-memory`)
//! - `orderdesk init-db` creates the tables and exits

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::OrderdeskConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "orderdesk",
    author,
    version,
    about = "CRUD HTTP API for company and order records"
)]
struct Cli {
    /// Debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.orderdesk/config.toml if present)
    #[arg(long, global = true, env = "ORDERDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Create the company and orders tables if missing
    InitDb(commands::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env feeds clap's env fallbacks, so load it first
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .context("Failed to initialize logging")?;

    let config = OrderdeskConfig::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args, config).await,
        Commands::InitDb(args) => commands::run_init_db(args, config).await,
    };

    tracing_setup::shutdown_otel();
    result
}
