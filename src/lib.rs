//! movieql - GraphQL API for movies and the actors linked to them
//!
//! All operations are exposed via GraphQL at /graphql and backed by SQLite.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod graphql;

pub use app::{AppState, build_app};
pub use error::CatalogError;
