//! Domain errors shared by the repositories and the GraphQL layer
//!
//! Repositories return [`Result`]; resolvers turn a [`CatalogError`] into an
//! `async_graphql::Error` carrying a machine-readable `code` extension.

use async_graphql::ErrorExtensions;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Raised when a movie/actor pair is linked twice
    #[error("Already existing: {0}")]
    AlreadyExisting(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn movie_not_found(id: i64) -> Self {
        Self::NotFound { entity: "Movie", id }
    }

    pub fn actor_not_found(id: i64) -> Self {
        Self::NotFound { entity: "Actor", id }
    }

    /// Error for a duplicate movie/actor association
    pub fn association_exists(movie_id: i64, actor_id: i64) -> Self {
        Self::AlreadyExisting(format!("movieId: {} and actorId: {}", movie_id, actor_id))
    }

    /// Code exposed under `extensions.code` in GraphQL responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AlreadyExisting(_) => "ALREADY_EXISTING",
            Self::Validation(_) => "BAD_USER_INPUT",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_association_exists_message_carries_both_ids() {
        let err = CatalogError::association_exists(12, 7);
        assert_eq!(err.to_string(), "Already existing: movieId: 12 and actorId: 7");
        assert_eq!(err.code(), "ALREADY_EXISTING");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(CatalogError::movie_not_found(3).to_string(), "Movie not found: 3");
        assert_eq!(CatalogError::actor_not_found(4).code(), "NOT_FOUND");
    }

    #[test]
    fn test_extend_sets_code_extension() {
        let err = CatalogError::Validation("title must not be empty".into()).extend();
        assert_eq!(err.message, "Invalid input: title must not be empty");
        let code = err
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(code, Some(async_graphql::Value::String("BAD_USER_INPUT".to_string())));
    }
}
