use utoipa::OpenApi;

use crate::models::{ErrorBody, HealthResponse, UserPayload, UserResponse};

/// OpenAPI documentation for the users API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "CRUD endpoints for a users collection, plus a random-user pick.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD and random selection")
    ),
    paths(
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::add_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::get_random_user,
        crate::handlers::health_check
    ),
    components(schemas(UserPayload, UserResponse, ErrorBody, HealthResponse))
)]
pub struct ApiDoc;
