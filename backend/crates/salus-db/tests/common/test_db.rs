use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
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

    pool
}

/// Number of rows in `usuario`
pub async fn count_users(pool: &SqlitePool) -> i64 {
    // Use sqlx::query_scalar (not query_scalar!) to avoid offline mode issues in tests
    sqlx::query_scalar("SELECT COUNT(*) FROM usuario")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
