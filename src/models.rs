use serde::{Deserialize, Serialize};

/// The fixed list served by `GET /api/values`. Never indexed by `id`.
pub const VALUES: [&str; 2] = ["value1", "value2"];

pub const POST_SUCCESSFUL: &str = "POST Successful";
pub const PUT_SUCCESSFUL: &str = "PUT Successful";

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
