pub mod api_doc;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;

/// Build the full application router
///
/// The router holds no state, so tests can call this per request and drive
/// it with `tower::ServiceExt::oneshot`.
pub fn app() -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::VALUES,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::VALUE_ITEM,
            get(handlers::get_handler)
                .put(handlers::put_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
