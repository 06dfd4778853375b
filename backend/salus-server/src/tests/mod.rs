mod api;

use crate::AppState;

use salus_auth::TokenService;
use salus_config::CorsConfig;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub(crate) async fn create_test_state() -> AppState {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse in-memory options");

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    salus_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        token_service: Arc::new(TokenService::new(b"test-secret", 60)),
        cors: CorsConfig::default(),
    }
}
