pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connection_pool::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations (creates `usuario` when absent)
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
