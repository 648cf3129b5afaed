//! In-memory adapter used for local runs without MongoDB and in tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::errors::ApiError;
use crate::models::{User, UserFields};
use crate::repositories::UserRepository;

/// Insertion-ordered user store held in process memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, key: ObjectId) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.key == Some(key)).cloned())
    }

    async fn insert(&self, fields: UserFields) -> Result<ObjectId, ApiError> {
        let key = ObjectId::new();
        self.users.write().await.push(User::from_fields(key, fields));
        Ok(key)
    }

    async fn replace_fields(
        &self,
        key: ObjectId,
        fields: UserFields,
    ) -> Result<Option<User>, ApiError> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.key == Some(key)).map(|user| {
            user.overwrite(fields);
            user.clone()
        }))
    }

    async fn delete(&self, key: ObjectId) -> Result<u64, ApiError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.key != Some(key));
        Ok((before - users.len()) as u64)
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.users.read().await.len() as u64)
    }

    async fn find_nth(&self, offset: u64) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(usize::try_from(offset)
            .ok()
            .and_then(|i| users.get(i))
            .cloned())
    }

    async fn ping(&self) -> Result<(), ApiError> {
        Ok(())
    }
}
