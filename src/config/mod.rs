//! Application configuration management

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind
    pub host: String,

    /// Server port
    pub port: u16,

    /// SQLite URL, e.g. `sqlite:./data/movieql.db` or `sqlite::memory:`
    pub database_url: String,

    /// Maximum pooled connections
    pub database_max_connections: u32,

    /// How long to keep retrying the initial connection
    pub database_connect_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // DATABASE_PATH takes a plain file path, DATABASE_URL a full URL
        let database_url = env::var("DATABASE_URL")
            .or_else(|_| env::var("DATABASE_PATH").map(|path| format!("sqlite:{}", path)))
            .unwrap_or_else(|_| "sqlite:./data/movieql.db".to_string());

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .context("Invalid PORT")?,

            database_url,

            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            database_connect_timeout: Duration::from_secs(
                env::var("DATABASE_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
