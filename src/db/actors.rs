//! Actor database repository

use sqlx::{SqliteConnection, SqlitePool};

use crate::db::now_iso8601;
use crate::error::{CatalogError, Result};

/// Actor record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ActorRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
}

/// Input for creating an actor
#[derive(Debug, Clone, Default)]
pub struct ActorFields {
    pub first_name: String,
    pub last_name: String,
}

impl ActorFields {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    fn normalized(self) -> Result<Self> {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(CatalogError::Validation(
                "actor first and last name must not be empty".into(),
            ));
        }
        Ok(Self {
            first_name,
            last_name,
        })
    }
}

pub(crate) async fn find_actor(conn: &mut SqliteConnection, id: i64) -> Result<Option<ActorRecord>> {
    let record = sqlx::query_as::<_, ActorRecord>(
        "SELECT id, first_name, last_name, created_at FROM actors WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(record)
}

pub struct ActorRepository {
    pool: SqlitePool,
}

impl ActorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every actor
    pub async fn list_all(&self) -> Result<Vec<ActorRecord>> {
        let mut tx = self.pool.begin().await?;

        let records = sqlx::query_as::<_, ActorRecord>(
            "SELECT id, first_name, last_name, created_at FROM actors ORDER BY id",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(records)
    }

    /// Get an actor by ID
    pub async fn get_by_id(&self, id: i64) -> Result<ActorRecord> {
        let mut tx = self.pool.begin().await?;
        let record = find_actor(&mut tx, id)
            .await?
            .ok_or_else(|| CatalogError::actor_not_found(id))?;
        tx.commit().await?;
        Ok(record)
    }

    /// List the actors linked to a movie.
    ///
    /// An unknown movie ID yields an empty list.
    pub async fn list_by_movie(&self, movie_id: i64) -> Result<Vec<ActorRecord>> {
        let mut tx = self.pool.begin().await?;

        let records = sqlx::query_as::<_, ActorRecord>(
            r#"
            SELECT a.id, a.first_name, a.last_name, a.created_at
            FROM actors a
            INNER JOIN actor_movie am ON am.actor_id = a.id
            WHERE am.movie_id = ?1
            ORDER BY a.id
            "#,
        )
        .bind(movie_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(records)
    }

    /// Create a new actor
    pub async fn create(&self, input: ActorFields) -> Result<ActorRecord> {
        let input = input.normalized()?;
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, ActorRecord>(
            r#"
            INSERT INTO actors (first_name, last_name, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, first_name, last_name, created_at
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(now_iso8601())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(actor_id = record.id, "Created actor");
        Ok(record)
    }

    /// Delete an actor and its movie links. Returns false if no actor had this ID.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM actor_movie WHERE actor_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM actors WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
