use crate::models::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Liveness probe
///
/// Nothing sits behind the values endpoints, so reaching the handler is the
/// whole check.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
