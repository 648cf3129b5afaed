//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::{ERR_DATABASE_UNAVAILABLE, MSG_SERVER_RUNNING};

/// Error object returned by the random-user endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "No users found.")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: MSG_SERVER_RUNNING.to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            status: "UNAVAILABLE".to_string(),
            message: ERR_DATABASE_UNAVAILABLE.to_string(),
        }
    }
}
