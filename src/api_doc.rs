use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::HealthResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "values-api",
        version = "1.0.0",
        description = "CRUD-style routes over a fixed list of two values"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::put::put_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "values", description = "Values operations")
    )
)]
pub struct ApiDoc;
