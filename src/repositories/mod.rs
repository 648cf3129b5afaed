//! Repository layer for database operations.
//!
//! Services talk to storage only through [`UserRepository`], so the MongoDB
//! adapter can be swapped for the in-memory one in tests or local runs.

pub mod memory;
pub mod user_repository;

#[cfg(test)]
pub mod test_support;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::{User, UserFields};

pub use memory::InMemoryUserRepository;
pub use user_repository::MongoUserRepository;

/// Storage port for the users collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in the collection's natural order.
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    async fn find_by_id(&self, key: ObjectId) -> Result<Option<User>, ApiError>;

    /// Persist a new user and return its storage key.
    async fn insert(&self, fields: UserFields) -> Result<ObjectId, ApiError>;

    /// Overwrite every client-owned field of the user at `key` in one step.
    ///
    /// Returns the updated user, or `None` when no user has that key.
    async fn replace_fields(
        &self,
        key: ObjectId,
        fields: UserFields,
    ) -> Result<Option<User>, ApiError>;

    /// Delete the user at `key`, returning how many documents were removed.
    async fn delete(&self, key: ObjectId) -> Result<u64, ApiError>;

    async fn count(&self) -> Result<u64, ApiError>;

    /// The user at `offset` in natural order, `None` past the end.
    async fn find_nth(&self, offset: u64) -> Result<Option<User>, ApiError>;

    /// Check that the backing store answers.
    async fn ping(&self) -> Result<(), ApiError>;
}
