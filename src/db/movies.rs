//! Movie database repository

use sqlx::{SqliteConnection, SqlitePool};

use crate::db::now_iso8601;
use crate::error::{CatalogError, Result};

/// Movie record from database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    // Timestamps (RFC 3339)
    pub created_at: String,
    pub updated_at: String,
}

/// Writable movie fields. Used for both create and update; an update
/// replaces every column with these values.
#[derive(Debug, Clone, Default)]
pub struct MovieFields {
    pub title: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
}

impl MovieFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Trim the title and reject it when nothing is left
    fn normalized(mut self) -> Result<Self> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CatalogError::Validation("movie title must not be empty".into()));
        }
        self.title = title.to_string();
        Ok(self)
    }
}

/// Look up a movie on an open connection (usually a transaction)
pub(crate) async fn find_movie(conn: &mut SqliteConnection, id: i64) -> Result<Option<MovieRecord>> {
    let record = sqlx::query_as::<_, MovieRecord>(
        r#"
        SELECT id, title, description, director, release_year, created_at, updated_at
        FROM movies
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(record)
}

pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every movie
    pub async fn list_all(&self) -> Result<Vec<MovieRecord>> {
        let mut tx = self.pool.begin().await?;

        let records = sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT id, title, description, director, release_year, created_at, updated_at
            FROM movies
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(records)
    }

    /// Get a movie by ID
    pub async fn get_by_id(&self, id: i64) -> Result<MovieRecord> {
        let mut tx = self.pool.begin().await?;
        let record = find_movie(&mut tx, id)
            .await?
            .ok_or_else(|| CatalogError::movie_not_found(id))?;
        tx.commit().await?;
        Ok(record)
    }

    /// List the movies an actor is linked to
    pub async fn list_by_actor(&self, actor_id: i64) -> Result<Vec<MovieRecord>> {
        let mut tx = self.pool.begin().await?;

        let records = sqlx::query_as::<_, MovieRecord>(
            r#"
            SELECT m.id, m.title, m.description, m.director, m.release_year,
                   m.created_at, m.updated_at
            FROM movies m
            INNER JOIN actor_movie am ON am.movie_id = m.id
            WHERE am.actor_id = ?1
            ORDER BY m.id
            "#,
        )
        .bind(actor_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(records)
    }

    /// Create a new movie
    pub async fn create(&self, input: MovieFields) -> Result<MovieRecord> {
        let input = input.normalized()?;
        let now = now_iso8601();
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, MovieRecord>(
            r#"
            INSERT INTO movies (title, description, director, release_year, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING id, title, description, director, release_year, created_at, updated_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.director)
        .bind(input.release_year)
        .bind(&now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(movie_id = record.id, title = %record.title, "Created movie");
        Ok(record)
    }

    /// Replace every writable field of a movie
    pub async fn update(&self, id: i64, input: MovieFields) -> Result<MovieRecord> {
        let input = input.normalized()?;
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, MovieRecord>(
            r#"
            UPDATE movies SET
                title = ?2,
                description = ?3,
                director = ?4,
                release_year = ?5,
                updated_at = ?6
            WHERE id = ?1
            RETURNING id, title, description, director, release_year, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.director)
        .bind(input.release_year)
        .bind(now_iso8601())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| CatalogError::movie_not_found(id))?;

        tx.commit().await?;
        tracing::info!(movie_id = id, "Updated movie");
        Ok(record)
    }

    /// Delete a movie and its actor links. Returns false if no movie had this ID.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM actor_movie WHERE movie_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM movies WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(movie_id = id, "Deleted movie");
        }
        Ok(deleted)
    }

    /// Link an actor to a movie and return the movie.
    ///
    /// A second link for the same pair fails with [`CatalogError::AlreadyExisting`].
    /// Only the constraint violation is translated: a missing movie or actor is
    /// reported as not found, and any other insert failure stays a database error.
    ///
    /// The transaction takes the write lock up front (`BEGIN IMMEDIATE`). A
    /// deferred one would read under a shared lock and then fail with
    /// `SQLITE_BUSY` when upgrading next to another linker.
    pub async fn add_actor(&self, movie_id: i64, actor_id: i64) -> Result<MovieRecord> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let movie = find_movie(&mut tx, movie_id)
            .await?
            .ok_or_else(|| CatalogError::movie_not_found(movie_id))?;

        if crate::db::actors::find_actor(&mut tx, actor_id).await?.is_none() {
            return Err(CatalogError::actor_not_found(actor_id));
        }

        sqlx::query("INSERT INTO actor_movie (movie_id, actor_id, created_at) VALUES (?1, ?2, ?3)")
            .bind(movie_id)
            .bind(actor_id)
            .bind(now_iso8601())
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    tracing::warn!(movie_id, actor_id, "Actor already linked to movie");
                    CatalogError::association_exists(movie_id, actor_id)
                }
                other => CatalogError::Database(other),
            })?;

        tx.commit().await?;
        tracing::info!(movie_id, actor_id, "Linked actor to movie");
        Ok(movie)
    }

    /// Remove an actor link. Returns false if the pair was not linked.
    pub async fn remove_actor(&self, movie_id: i64, actor_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM actor_movie WHERE movie_id = ?1 AND actor_id = ?2")
            .bind(movie_id)
            .bind(actor_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
