use crate::{AppState, health, login, preflight, register};

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use log::warn;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors.allowed_origins);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Auth endpoints
        .route("/auth/registro", post(register))
        .route("/login", post(login))
        // Add shared state
        .with_state(state)
        .layer(cors)
        // Outermost, so it sees the CORS layer's preflight answers
        .layer(middleware::from_fn(preflight::no_content_preflight))
}

/// Credentialed CORS for an explicit origin list. Requested methods and
/// headers are echoed back, which permits all of them.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
