// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const VALUES: &str = "/api/values";
pub const VALUE_ITEM: &str = "/api/values/{id}";

pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
