use crate::error::{parse_value_id, ApiError, ErrorResponse};
use crate::models::PUT_SUCCESSFUL;
use crate::routes;
use axum::{extract::Path, http::StatusCode, Json};

/// PUT /api/values/{id} handler - Accept an update
#[utoipa::path(
    put,
    path = routes::VALUE_ITEM,
    params(
        ("id" = i32, Path, description = "Value id")
    ),
    request_body = String,
    responses(
        (status = 200, description = "Acknowledged", body = String, example = json!("PUT Successful")),
        (status = 400, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "values"
)]
pub async fn put_handler(
    Path(id_str): Path<String>,
    body: String,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    // Parse and validate id
    let id = parse_value_id(&id_str)?;

    // Body is discarded, nothing is stored

    tracing::info!("Accepted update for value id: {} ({} bytes ignored)", id, body.len());
    Ok((StatusCode::OK, Json(PUT_SUCCESSFUL)))
}
