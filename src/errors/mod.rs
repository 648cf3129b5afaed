use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::constants::{ERR_NO_USERS_FOUND, ERR_SERVER};
use crate::models::{ErrorBody, HealthResponse};

/// Failures surfaced by the users API.
///
/// The CRUD endpoints collapse every variant into a 400 carrying the JSON
/// string `"Error: <message>"`. The random-user endpoint only ever produces
/// `NoUsers` (404) or `Server` (500), both rendered as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid user ID format: {0}")]
    InvalidId(String),
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("User not found")]
    UserNotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Storage(String),
    #[error("No users found.")]
    NoUsers,
    #[error("Server error: {0}")]
    Server(String),
    #[error("Database is unreachable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Re-classify a failure for the random-user endpoint, where anything
    /// other than "nothing to pick" is a server error.
    pub fn into_server(self) -> Self {
        match self {
            ApiError::NoUsers => ApiError::NoUsers,
            ApiError::Server(detail) => ApiError::Server(detail),
            other => ApiError::Server(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoUsers => StatusCode::NOT_FOUND,
            ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NoUsers => HttpResponse::NotFound().json(ErrorBody::new(ERR_NO_USERS_FOUND)),
            ApiError::Server(detail) => {
                log::error!("Unexpected failure: {}", detail);
                HttpResponse::InternalServerError().json(ErrorBody::new(ERR_SERVER))
            }
            ApiError::Unavailable(detail) => {
                log::error!("Health check failed: {}", detail);
                HttpResponse::ServiceUnavailable().json(HealthResponse::unavailable())
            }
            other => HttpResponse::build(other.status_code()).json(format!("Error: {}", other)),
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: ApiError) -> (StatusCode, Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[actix_web::test]
    async fn crud_failures_render_as_error_string() {
        let (status, body) = body_json(ApiError::Storage("connection reset".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Value::String("Error: connection reset".to_string()));
    }

    #[actix_web::test]
    async fn validation_error_lists_every_message() {
        let err = ApiError::Validation(vec!["a".to_string(), "b".to_string()]);
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Value::String("Error: Validation failed: a, b".to_string()));
    }

    #[actix_web::test]
    async fn update_on_missing_user_is_a_bad_request() {
        let (status, body) = body_json(ApiError::UserNotFound).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, Value::String("Error: User not found".to_string()));
    }

    #[actix_web::test]
    async fn no_users_renders_error_object() {
        let (status, body) = body_json(ApiError::NoUsers).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No users found.");
    }

    #[actix_web::test]
    async fn server_error_hides_detail() {
        let (status, body) = body_json(ApiError::Server("socket closed".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error while fetching random user.");
    }

    #[test]
    fn into_server_keeps_no_users() {
        assert!(matches!(ApiError::NoUsers.into_server(), ApiError::NoUsers));
        assert!(matches!(
            ApiError::Storage("boom".to_string()).into_server(),
            ApiError::Server(detail) if detail == "boom"
        ));
    }
}
