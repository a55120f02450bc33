use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for the values endpoints
///
/// Only malformed path segments carry a JSON body. The two domain errors
/// answer with a bare status code and an empty body.
#[derive(Debug)]
pub enum ApiError {
    /// `{id}` path segment is not a 32-bit integer
    MalformedId(String),
    /// `id` below 1 on a read
    InvalidIdentifier(i32),
    /// Nothing backs the values list, so nothing can be deleted
    ResourceNotFound(i32),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedId(_) | ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::MalformedId(raw) => {
                let body = Json(ErrorResponse {
                    error: format!("Invalid value id: expected an integer, got '{}'", raw),
                });
                (status, body).into_response()
            }
            ApiError::InvalidIdentifier(_) | ApiError::ResourceNotFound(_) => {
                status.into_response()
            }
        }
    }
}

/// Parse an `{id}` path segment into a value id
pub fn parse_value_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::MalformedId(raw.to_string()))
}
