//! GraphQL type definitions
//!
//! Response types are read-only projections of the database records; inputs
//! convert into the repository field structs.

use async_graphql::{
    ComplexObject, Context, ErrorExtensions, InputObject, InputValueError, InputValueResult,
    Result, Scalar, ScalarType, SimpleObject, Value,
};
use serde::{Deserialize, Serialize};

use crate::db::{ActorFields, Database, MovieFields};

use super::helpers::{actor_record_to_graphql, movie_record_to_graphql};

/// 64-bit integer identifier.
///
/// Accepts a JSON number or a numeric string; always serialized as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Long(pub i64);

#[Scalar(name = "Long")]
impl ScalarType for Long {
    fn parse(value: Value) -> InputValueResult<Self> {
        let parsed = match &value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed
            .map(Long)
            .ok_or_else(|| InputValueError::expected_type(value))
    }

    fn to_value(&self) -> Value {
        Value::Number(self.0.into())
    }
}

/// A movie
#[derive(Debug, Clone, PartialEq, SimpleObject, Serialize, Deserialize)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: Long,
    pub title: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Last update time (RFC 3339)
    pub updated_at: String,
}

#[ComplexObject]
impl MovieResponse {
    /// Actors linked to this movie
    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<ActorResponse>> {
        let db = ctx.data_unchecked::<Database>();
        let records = db
            .actors()
            .list_by_movie(self.id.0)
            .await
            .map_err(|e| e.extend())?;

        Ok(records.into_iter().map(actor_record_to_graphql).collect())
    }
}

/// An actor
#[derive(Debug, Clone, PartialEq, SimpleObject, Serialize, Deserialize)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct ActorResponse {
    pub id: Long,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
}

#[ComplexObject]
impl ActorResponse {
    /// Movies this actor is linked to
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<MovieResponse>> {
        let db = ctx.data_unchecked::<Database>();
        let records = db
            .movies()
            .list_by_actor(self.id.0)
            .await
            .map_err(|e| e.extend())?;

        Ok(records.into_iter().map(movie_record_to_graphql).collect())
    }
}

/// Movie fields for create and update. An update replaces every field,
/// so omitted optional fields are cleared.
#[derive(Debug, Clone, InputObject)]
pub struct MovieInput {
    pub title: String,
    pub description: Option<String>,
    pub director: Option<String>,
    pub release_year: Option<i32>,
}

impl From<MovieInput> for MovieFields {
    fn from(input: MovieInput) -> Self {
        MovieFields {
            title: input.title,
            description: input.description,
            director: input.director,
            release_year: input.release_year,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct ActorInput {
    pub first_name: String,
    pub last_name: String,
}

impl From<ActorInput> for ActorFields {
    fn from(input: ActorInput) -> Self {
        ActorFields {
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_parses_numbers_and_numeric_strings() {
        assert_eq!(Long::parse(Value::Number(42i64.into())).ok(), Some(Long(42)));
        assert_eq!(
            Long::parse(Value::String("9007199254740993".into())).ok(),
            Some(Long(9_007_199_254_740_993))
        );
        assert!(Long::parse(Value::String("abc".into())).is_err());
        assert!(Long::parse(Value::Boolean(true)).is_err());
        assert_eq!(Long(7).to_value(), Value::Number(7i64.into()));
    }
}
