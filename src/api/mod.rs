//! HTTP routes: GraphQL endpoint and health checks

pub mod graphql;
pub mod health;
