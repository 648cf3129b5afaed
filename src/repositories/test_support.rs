//! Repository doubles shared by service and route tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::{User, UserFields};
use crate::repositories::UserRepository;

fn refused<T>() -> Result<T, ApiError> {
    Err(ApiError::Storage("connection refused".to_string()))
}

/// Every call fails, standing in for a lost connection.
pub struct FailingRepository;

#[async_trait]
impl UserRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        refused()
    }
    async fn find_by_id(&self, _key: ObjectId) -> Result<Option<User>, ApiError> {
        refused()
    }
    async fn insert(&self, _fields: UserFields) -> Result<ObjectId, ApiError> {
        refused()
    }
    async fn replace_fields(
        &self,
        _key: ObjectId,
        _fields: UserFields,
    ) -> Result<Option<User>, ApiError> {
        refused()
    }
    async fn delete(&self, _key: ObjectId) -> Result<u64, ApiError> {
        refused()
    }
    async fn count(&self) -> Result<u64, ApiError> {
        refused()
    }
    async fn find_nth(&self, _offset: u64) -> Result<Option<User>, ApiError> {
        refused()
    }
    async fn ping(&self) -> Result<(), ApiError> {
        refused()
    }
}

/// Reports `count` users but finds none, as when the collection empties
/// between the count and the fetch.
pub struct ShrinkingRepository {
    pub count: u64,
}

#[async_trait]
impl UserRepository for ShrinkingRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        Ok(Vec::new())
    }
    async fn find_by_id(&self, _key: ObjectId) -> Result<Option<User>, ApiError> {
        Ok(None)
    }
    async fn insert(&self, _fields: UserFields) -> Result<ObjectId, ApiError> {
        Ok(ObjectId::new())
    }
    async fn replace_fields(
        &self,
        _key: ObjectId,
        _fields: UserFields,
    ) -> Result<Option<User>, ApiError> {
        Ok(None)
    }
    async fn delete(&self, _key: ObjectId) -> Result<u64, ApiError> {
        Ok(0)
    }
    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.count)
    }
    async fn find_nth(&self, _offset: u64) -> Result<Option<User>, ApiError> {
        Ok(None)
    }
    async fn ping(&self) -> Result<(), ApiError> {
        Ok(())
    }
}
