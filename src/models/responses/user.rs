//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserResponse {
    /// Storage-assigned key, used in `/{id}` paths
    #[serde(rename = "_id")]
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub key: String,
    /// Application-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "alice")]
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            key: user.key.map(|key| key.to_hex()).unwrap_or_default(),
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}
