use salus_auth::TokenService;
use salus_config::CorsConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared, immutable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Built at startup from the auth config. Not yet used by the login flow.
    pub token_service: Arc<TokenService>,
    pub cors: CorsConfig,
}
