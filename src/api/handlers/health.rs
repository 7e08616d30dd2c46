//! Liveness probe handler.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports process liveness.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
