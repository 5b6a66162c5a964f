use axum::Json;

use crate::dto::health_dto::HealthResponse;

/// Health check simple
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
