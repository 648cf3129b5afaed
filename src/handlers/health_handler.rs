//! Operational endpoints: health check and API documentation.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::services::UserService;

/// Health check, including a storage round trip
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and storage are up", body = HealthResponse),
        (status = 503, description = "Storage is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    user_service.ping().await?;
    Ok(HttpResponse::Ok().json(HealthResponse::ok()))
}

/// OpenAPI document for this service
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
