use crate::models::POST_SUCCESSFUL;
use crate::routes;
use axum::{http::StatusCode, Json};

/// POST /api/values handler - Accept a value
///
/// The body is read and dropped; nothing is stored.
#[utoipa::path(
    post,
    path = routes::VALUES,
    request_body = String,
    responses(
        (status = 200, description = "Acknowledged", body = String, example = json!("POST Successful"))
    ),
    tag = "values"
)]
pub async fn create_handler(body: String) -> (StatusCode, Json<&'static str>) {
    // Body is discarded, nothing is stored
    tracing::debug!("Ignoring POST body of {} bytes", body.len());
    (StatusCode::OK, Json(POST_SUCCESSFUL))
}
