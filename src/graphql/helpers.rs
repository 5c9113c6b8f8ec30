// Record-to-response conversions shared across GraphQL query/mutation modules.

use crate::db::{ActorRecord, MovieRecord};
use crate::graphql::types::{ActorResponse, Long, MovieResponse};

/// Convert a MovieRecord from the database to a GraphQL MovieResponse
pub(crate) fn movie_record_to_graphql(r: MovieRecord) -> MovieResponse {
    MovieResponse {
        id: Long(r.id),
        title: r.title,
        description: r.description,
        director: r.director,
        release_year: r.release_year,
        created_at: r.created_at,
        updated_at: r.updated_at,
    }
}

/// Convert an ActorRecord from the database to a GraphQL ActorResponse
pub(crate) fn actor_record_to_graphql(r: ActorRecord) -> ActorResponse {
    ActorResponse {
        id: Long(r.id),
        first_name: r.first_name,
        last_name: r.last_name,
        created_at: r.created_at,
    }
}
