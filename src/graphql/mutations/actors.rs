use super::prelude::*;

#[derive(Default)]
pub struct ActorMutations;

#[Object]
impl ActorMutations {
    /// Create an actor
    async fn create_actor(&self, ctx: &Context<'_>, actor: ActorInput) -> Result<ActorResponse> {
        let db = ctx.data_unchecked::<Database>();
        let record = db
            .actors()
            .create(actor.into())
            .await
            .map_err(|e| e.extend())?;
        Ok(actor_record_to_graphql(record))
    }

    /// Delete an actor
    async fn delete_actor(&self, ctx: &Context<'_>, actor_id: Long) -> Result<bool> {
        let db = ctx.data_unchecked::<Database>();
        db.actors()
            .delete(actor_id.0)
            .await
            .map_err(|e| e.extend())
    }
}
