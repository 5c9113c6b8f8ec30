use super::prelude::*;

#[derive(Default)]
pub struct MovieQueries;

#[Object]
impl MovieQueries {
    /// Get all movies
    async fn all_movies(&self, ctx: &Context<'_>) -> Result<Vec<MovieResponse>> {
        let db = ctx.data_unchecked::<Database>();

        let records = db.movies().list_all().await.map_err(|e| e.extend())?;

        tracing::debug!(count = records.len(), "Fetched all movies");
        Ok(records.into_iter().map(movie_record_to_graphql).collect())
    }

    /// Get a movie
    async fn get_movie(&self, ctx: &Context<'_>, movie_id: Long) -> Result<MovieResponse> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .movies()
            .get_by_id(movie_id.0)
            .await
            .map_err(|e| e.extend())?;

        Ok(movie_record_to_graphql(record))
    }
}
