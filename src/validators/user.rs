//! User-related validators.

use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;

/// Parse a storage key taken from a request path.
pub fn parse_user_key(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}
