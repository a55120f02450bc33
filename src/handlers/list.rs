use crate::models::VALUES;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /api/values handler - List the fixed values
#[utoipa::path(
    get,
    path = routes::VALUES,
    responses(
        (status = 200, description = "The two fixed values", body = [String], example = json!(["value1", "value2"]))
    ),
    tag = "values"
)]
pub async fn list_handler() -> (StatusCode, Json<[&'static str; 2]>) {
    tracing::info!("Listed {} values", VALUES.len());
    (StatusCode::OK, Json(VALUES))
}
