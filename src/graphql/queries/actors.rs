use super::prelude::*;

#[derive(Default)]
pub struct ActorQueries;

#[Object]
impl ActorQueries {
    /// Get all actors
    async fn all_actors(&self, ctx: &Context<'_>) -> Result<Vec<ActorResponse>> {
        let db = ctx.data_unchecked::<Database>();
        let records = db.actors().list_all().await.map_err(|e| e.extend())?;
        Ok(records.into_iter().map(actor_record_to_graphql).collect())
    }

    /// Get an actor
    async fn get_actor(&self, ctx: &Context<'_>, actor_id: Long) -> Result<ActorResponse> {
        let db = ctx.data_unchecked::<Database>();
        let record = db
            .actors()
            .get_by_id(actor_id.0)
            .await
            .map_err(|e| e.extend())?;
        Ok(actor_record_to_graphql(record))
    }
}
