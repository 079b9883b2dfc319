use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::time::Instant;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is running")),
    tag = "health"
)]
pub async fn liveness_check() -> impl IntoResponse {
    Json(json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Readiness probe: the database must answer
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Ready to serve traffic"),
        (status = 503, description = "Database unreachable")
    ),
    tag = "health"
)]
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let db_result = crate::db::check_connection(&state.db).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match db_result {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": { "database": { "status": "up", "latency_ms": latency_ms } }
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "checks": { "database": { "status": "down" } }
                })),
            )
        }
    }
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(liveness_check))
        .route("/health/ready", get(readiness_check))
}
