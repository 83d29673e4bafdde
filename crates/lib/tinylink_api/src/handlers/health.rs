//! Health probe.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /healthz` — liveness probe reporting the core version.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: tinylink_core::version().to_string(),
    })
}
