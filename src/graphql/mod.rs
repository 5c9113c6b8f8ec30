//! GraphQL API for movies and actors
//!
//! Queries and mutations live in per-domain objects under `queries/` and
//! `mutations/`, merged into the roots in `schema.rs`. Resolvers call a
//! repository from [`crate::db::Database`] (one transaction per call) and
//! convert the returned records with the helpers in `helpers.rs`.

pub mod helpers;
pub mod mutations;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{MovieSchema, MutationRoot, QueryRoot, build_schema};
pub use types::{ActorInput, ActorResponse, Long, MovieInput, MovieResponse};
