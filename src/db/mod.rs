//! Database connection and repositories
//!
//! Every repository method runs in its own transaction: it begins one on the
//! pool, executes its statements against it and commits only when all of them
//! succeeded. Returning early with `?` drops the transaction, which rolls it back.

pub mod actors;
pub mod movies;
pub mod schema_sync;

use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use actors::{ActorFields, ActorRecord, ActorRepository};
pub use movies::{MovieFields, MovieRecord, MovieRepository};
pub use schema_sync::{SchemaSyncResult, sync_schema};

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection pool. The database file is created if missing.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true);

        if let Some(parent) = options.get_filename().parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Connect, retrying every second until `timeout` has elapsed
    pub async fn connect_with_retry(
        url: &str,
        max_connections: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let deadline = Instant::now() + timeout;
        loop {
            match Self::connect(url, max_connections).await {
                Ok(db) => return Ok(db),
                Err(e) if Instant::now() < deadline => {
                    tracing::warn!(error = %e, "Database connection failed, retrying in 1s");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
                Err(e) => return Err(e.context("Database connection timed out")),
            }
        }
    }

    /// Private in-memory database with the schema already in place.
    ///
    /// Uses a single connection that is never recycled, since every SQLite
    /// in-memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a movies repository
    pub fn movies(&self) -> MovieRepository {
        MovieRepository::new(self.pool.clone())
    }

    /// Get an actors repository
    pub fn actors(&self) -> ActorRepository {
        ActorRepository::new(self.pool.clone())
    }

    /// Create any missing tables and indexes
    pub async fn migrate(&self) -> Result<SchemaSyncResult> {
        let result = sync_schema(&self.pool)
            .await
            .context("Failed to sync database schema")?;
        Ok(result)
    }

    /// Round-trip a trivial query to prove the database answers
    pub async fn ping(&self) -> std::result::Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Current UTC timestamp as RFC 3339 text, the format stored in SQLite
pub(crate) fn now_iso8601() -> String {
    Utc::now().to_rfc3339()
}
