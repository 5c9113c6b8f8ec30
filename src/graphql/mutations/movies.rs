use super::prelude::*;

#[derive(Default)]
pub struct MovieMutations;

#[Object]
impl MovieMutations {
    /// Create a movie
    async fn create_movie(&self, ctx: &Context<'_>, movie: MovieInput) -> Result<MovieResponse> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .movies()
            .create(movie.into())
            .await
            .map_err(|e| e.extend())?;

        Ok(movie_record_to_graphql(record))
    }

    /// Update a movie
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        movie_id: Long,
        movie: MovieInput,
    ) -> Result<MovieResponse> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .movies()
            .update(movie_id.0, movie.into())
            .await
            .map_err(|e| e.extend())?;

        Ok(movie_record_to_graphql(record))
    }

    /// Delete a movie
    async fn delete_movie(&self, ctx: &Context<'_>, movie_id: Long) -> Result<bool> {
        let db = ctx.data_unchecked::<Database>();

        let deleted = db
            .movies()
            .delete(movie_id.0)
            .await
            .map_err(|e| e.extend())?;

        if !deleted {
            tracing::debug!(movie_id = movie_id.0, "Delete requested for unknown movie");
        }
        Ok(deleted)
    }

    /// Add actor to movie
    async fn add_actor_to_movie(
        &self,
        ctx: &Context<'_>,
        movie_id: Long,
        actor_id: Long,
    ) -> Result<MovieResponse> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .movies()
            .add_actor(movie_id.0, actor_id.0)
            .await
            .map_err(|e| e.extend())?;

        Ok(movie_record_to_graphql(record))
    }

    /// Remove actor from movie
    async fn remove_actor_from_movie(
        &self,
        ctx: &Context<'_>,
        movie_id: Long,
        actor_id: Long,
    ) -> Result<bool> {
        let db = ctx.data_unchecked::<Database>();

        let removed = db
            .movies()
            .remove_actor(movie_id.0, actor_id.0)
            .await
            .map_err(|e| e.extend())?;

        tracing::info!(movie_id = movie_id.0, actor_id = actor_id.0, removed, "Unlink actor from movie");
        Ok(removed)
    }
}
