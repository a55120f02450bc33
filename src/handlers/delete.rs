use crate::error::{parse_value_id, ApiError, ErrorResponse};
use crate::routes;
use axum::extract::Path;

/// DELETE /api/values/{id} handler
///
/// There is no store behind the values list, so every well-formed id is
/// reported as not found.
#[utoipa::path(
    delete,
    path = routes::VALUE_ITEM,
    params(
        ("id" = i32, Path, description = "Value id")
    ),
    responses(
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Nothing to delete (empty body)")
    ),
    tag = "values"
)]
pub async fn delete_handler(Path(id_str): Path<String>) -> ApiError {
    // Parse and validate id; a well-formed id is still never found
    match parse_value_id(&id_str) {
        Ok(id) => {
            tracing::info!("Value not found for delete, id: {}", id);
            ApiError::ResourceNotFound(id)
        }
        Err(err) => err,
    }
}
