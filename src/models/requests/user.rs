//! User-related request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::{ERR_EMAIL_REQUIRED, ERR_ID_REQUIRED, ERR_USERNAME_REQUIRED};
use crate::errors::ApiError;
use crate::models::UserFields;
use crate::validators::validation_errors_to_api_error;

/// Request payload for creating or replacing a user.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation error instead of a body parse failure.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Application-assigned identifier (not the storage key)
    #[validate(required(message = "id is required"))]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Email address
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    /// Username
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    #[schema(example = "alice")]
    pub username: Option<String>,
}

impl UserPayload {
    /// Validate the payload and unwrap it into the fields a repository accepts.
    pub fn into_fields(self) -> Result<UserFields, ApiError> {
        self.validate().map_err(validation_errors_to_api_error)?;

        // `required` rules above guarantee every field is present here.
        let (Some(id), Some(email), Some(username)) = (self.id, self.email, self.username) else {
            return Err(ApiError::Validation(
                [ERR_EMAIL_REQUIRED, ERR_ID_REQUIRED, ERR_USERNAME_REQUIRED]
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            ));
        };
        Ok(UserFields { id, email, username })
    }
}
