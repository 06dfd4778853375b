#![allow(dead_code)]

//! Test infrastructure for salus-server API tests

use salus_auth::TokenService;
use salus_config::CorsConfig;
use salus_server::AppState;

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse in-memory options");

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    salus_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        token_service: Arc::new(TokenService::new(TEST_SECRET, 60)),
        cors: CorsConfig::default(),
    }
}

/// POST a JSON body and return status plus parsed response body
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

/// Register Ana (a@x.com / p1)
pub async fn register_ana(app: Router) -> (StatusCode, serde_json::Value) {
    post_json(
        app,
        "/auth/registro",
        serde_json::json!({ "nombre": "Ana", "email": "a@x.com", "contrasena": "p1" }),
    )
    .await
}

/// Number of rows in `usuario`
pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM usuario")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
