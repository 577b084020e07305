//! Layered configuration
//!
//! Precedence, lowest first: built-in defaults, `config.toml`, environment
//! (including `.env`), command-line flags. Clap handles the last two.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! cors_permissive = true
//! request_timeout_secs = 30
//!
//! [database]
//! url = "postgres://localhost/orderdesk"
//! max_connections = 5
//! init_schema = false
//! ```

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use orderdesk_server::db::DEFAULT_MAX_CONNECTIONS;
use orderdesk_server::ServerConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderdeskConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub cors_permissive: bool,
    pub request_timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_permissive: true,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: u32,
    pub init_schema: bool,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            init_schema: false,
        }
    }
}

impl OrderdeskConfig {
    /// Default config file path: ~/.orderdesk/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".orderdesk").join("config.toml"))
    }

    /// Load from an explicit path (must exist) or the default path (optional).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Values from the command line (already merged with the environment by clap)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub max_connections: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub init_schema: bool,
    pub cors_localhost: bool,
}

/// Where records live
#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    Postgres {
        url: String,
        max_connections: u32,
        init_schema: bool,
    },
    Memory,
}

/// Fully resolved settings for `serve`
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub backend: Backend,
}

impl OrderdeskConfig {
    /// Apply overrides on top of the file values.
    pub fn resolve(self, overrides: Overrides, in_memory: bool) -> Result<Settings> {
        let host = overrides.host.unwrap_or(self.server.host);
        let port = overrides.port.unwrap_or(self.server.port);
        let ip: IpAddr = host
            .parse()
            .with_context(|| format!("Invalid bind host '{}'", host))?;

        let server = ServerConfig {
            bind_addr: SocketAddr::new(ip, port),
            cors_permissive: self.server.cors_permissive && !overrides.cors_localhost,
            request_timeout: Duration::from_secs(
                overrides.timeout_secs.unwrap_or(self.server.request_timeout_secs),
            ),
        };

        let backend = if in_memory {
            Backend::Memory
        } else {
            let url = overrides
                .database_url
                .or(self.database.url)
                .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or [database].url in config.toml")?;
            Backend::Postgres {
                url,
                max_connections: overrides
                    .max_connections
                    .unwrap_or(self.database.max_connections),
                init_schema: overrides.init_schema || self.database.init_schema,
            }
        };

        Ok(Settings { server, backend })
    }
}
