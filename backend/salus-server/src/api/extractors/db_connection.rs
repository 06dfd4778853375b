//! Request-scoped database connection

use crate::{ApiError, AppState};

use std::future::Future;
use std::ops::{Deref, DerefMut};

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

/// One pooled connection held for the lifetime of a request.
///
/// Dropping the extractor returns the connection to the pool, so it is
/// released on every exit path of the handler, including `?` on an error.
pub struct DbConnection(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbConnection {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let conn = state.pool.acquire().await?;
            Ok(DbConnection(conn))
        }
    }
}

impl Deref for DbConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
