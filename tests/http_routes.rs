//! Integration tests for the HTTP router (health checks and /graphql over HTTP)

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use movieql::config::Config;
use movieql::db::Database;
use movieql::{AppState, build_app};

async fn app() -> axum::Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_connect_timeout: Duration::from_secs(1),
    };
    let db = Database::in_memory().await.expect("in-memory database");
    build_app(AppState::new(Arc::new(config), db))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthz_and_readyz() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], json!("healthy"));

    let response = app
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ready": true, "database": true }));
}

#[tokio::test]
async fn test_readyz_is_unavailable_once_database_is_closed() {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_connect_timeout: Duration::from_secs(1),
    };
    let db = Database::in_memory().await.expect("in-memory database");
    let app = build_app(AppState::new(Arc::new(config), db.clone()));
    db.close().await;

    let response = app
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await, json!({ "ready": false, "database": false }));
}

#[tokio::test]
async fn test_graphql_post_executes_query() {
    let app = app().await;
    let payload = json!({
        "query": "mutation { createMovie(movie: { title: \"Dune\" }) { id title } }"
    });

    let response = app
        .oneshot(
            Request::post("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["createMovie"]["title"], json!("Dune"));
    assert!(body["data"]["createMovie"]["id"].is_i64());
}

#[tokio::test]
async fn test_graphql_get_without_html_is_rejected() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app
        .oneshot(
            Request::get("/graphql")
                .header(header::ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
