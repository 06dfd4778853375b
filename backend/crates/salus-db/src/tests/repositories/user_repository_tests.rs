use crate::{DbError, MIGRATOR, UserRepository};

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

async fn setup_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[tokio::test]
async fn given_row_with_unknown_tipo_when_found_then_returns_corrupt_row_error() {
    let pool = setup_db().await;

    // Written outside the repository, as a legacy import would
    sqlx::query("INSERT INTO usuario (nombre, email, contrasena, tipo) VALUES ('Eva', 'e@x.com', 'p', 'gerente')")
        .execute(&pool)
        .await
        .expect("Failed to seed user");

    let mut conn = pool.acquire().await.unwrap();
    let result = UserRepository::find_by_email(&mut conn, "e@x.com").await;

    assert!(matches!(
        result,
        Err(DbError::CorruptRow { column: "tipo", .. })
    ));
}

#[tokio::test]
async fn given_row_inserted_without_profile_when_found_then_column_defaults_apply() {
    let pool = setup_db().await;

    sqlx::query("INSERT INTO usuario (nombre, email, contrasena) VALUES ('Leo', 'l@x.com', 'p')")
        .execute(&pool)
        .await
        .expect("Failed to seed user");

    let mut conn = pool.acquire().await.unwrap();
    let user = UserRepository::find_by_email(&mut conn, "l@x.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.role, salus_core::UserRole::Cliente);
    assert!(user.active);
    assert_eq!(user.surname, None);
}
