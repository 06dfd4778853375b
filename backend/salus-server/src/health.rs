use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const ROOT_MESSAGE: &str = "API de Salus Backend funcionando";

/// GET / - liveness message
pub async fn root() -> Response {
    (StatusCode::OK, Json(json!({ "mensaje": ROOT_MESSAGE }))).into_response()
}

/// GET /health - Health check including a database round trip
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, database) = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "operational"),
        Err(e) => {
            log::warn!("Health check database probe failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}
