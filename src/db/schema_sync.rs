//! Schema bootstrap
//!
//! Creates the tables this service needs when they are missing. Existing tables
//! are left untouched: there are no column renames or type changes.

use sqlx::SqlitePool;
use tracing::{debug, info};

/// Tables in creation order (associations reference movies and actors)
const TABLES: &[(&str, &str)] = &[
    (
        "movies",
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            director TEXT,
            release_year INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "actors",
        r#"
        CREATE TABLE IF NOT EXISTS actors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "actor_movie",
        r#"
        CREATE TABLE IF NOT EXISTS actor_movie (
            movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
            actor_id INTEGER NOT NULL REFERENCES actors(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL,
            PRIMARY KEY (movie_id, actor_id)
        )
        "#,
    ),
];

const INDEXES: &[&str] =
    &["CREATE INDEX IF NOT EXISTS idx_actor_movie_actor_id ON actor_movie (actor_id)"];

/// Result of a schema sync operation
#[derive(Debug, Default)]
pub struct SchemaSyncResult {
    pub tables_created: Vec<String>,
}

/// Check if a table exists in the database
async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

/// Create missing tables and indexes. Safe to run on every startup.
pub async fn sync_schema(pool: &SqlitePool) -> Result<SchemaSyncResult, sqlx::Error> {
    let mut result = SchemaSyncResult::default();

    for (table_name, create_sql) in TABLES {
        if table_exists(pool, table_name).await? {
            debug!(table = %table_name, "Table already exists");
            continue;
        }
        sqlx::query(create_sql).execute(pool).await?;
        result.tables_created.push(table_name.to_string());
    }

    for index_sql in INDEXES {
        sqlx::query(index_sql).execute(pool).await?;
    }

    if !result.tables_created.is_empty() {
        info!(tables = ?result.tables_created, "Created tables");
    }

    Ok(result)
}
