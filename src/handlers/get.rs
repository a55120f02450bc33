use crate::error::{parse_value_id, ApiError, ErrorResponse};
use crate::routes;
use axum::{extract::Path, http::StatusCode, Json};

/// GET /api/values/{id} handler - Echo a value id
///
/// The id is only checked against the lower bound; it does not select an
/// entry from the values list.
#[utoipa::path(
    get,
    path = routes::VALUE_ITEM,
    params(
        ("id" = i32, Path, description = "Value id, must be at least 1")
    ),
    responses(
        (status = 200, description = "The id itself", body = i32),
        (status = 400, description = "Id below 1 (empty body) or not an integer", body = ErrorResponse)
    ),
    tag = "values"
)]
pub async fn get_handler(
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<i32>), ApiError> {
    // Parse and validate id
    let id = parse_value_id(&id_str)?;

    // Ids below 1 are rejected with an empty body
    if id < 1 {
        tracing::info!("Rejected value id below 1: {}", id);
        return Err(ApiError::InvalidIdentifier(id));
    }

    tracing::info!("Returned value id: {}", id);
    Ok((StatusCode::OK, Json(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new().route(routes::VALUE_ITEM, get(get_handler))
    }

    async fn get_value(app: Router, id: &str) -> (StatusCode, axum::body::Bytes) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/values/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_get_endpoint_echoes_id() {
        for id in [1, 9, 17, 155, i32::MAX] {
            let (status, body) = get_value(setup_test_app(), &id.to_string()).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(String::from_utf8(body.to_vec()).unwrap(), id.to_string());
        }
    }

    #[tokio::test]
    async fn test_get_endpoint_rejects_ids_below_one() {
        for id in ["0", "-1", "-155"] {
            let (status, body) = get_value(setup_test_app(), id).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.is_empty());
        }
    }

    #[tokio::test]
    async fn test_get_endpoint_malformed_id() {
        let (status, body) = get_value(setup_test_app(), "not-a-number").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("not-a-number"));
    }
}
