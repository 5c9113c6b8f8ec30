//! GraphQL schema definition

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::mutations::{ActorMutations, MovieMutations};
use super::queries::{ActorQueries, MovieQueries};

/// The GraphQL schema type
pub type MovieSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MovieQueries, ActorQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(MovieMutations, ActorMutations);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(db: Database) -> MovieSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(db)
        .extension(Tracing)
        .finish()
}
