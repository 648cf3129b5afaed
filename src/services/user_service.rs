//! User service for CRUD operations and random selection.

use std::sync::Arc;

use log::{debug, info, warn};
use rand::Rng;

use crate::errors::ApiError;
use crate::models::{User, UserPayload};
use crate::repositories::UserRepository;
use crate::utils::mask_email;
use crate::validators::parse_user_key;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.repository.find_all().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Look up a user by storage key. An unknown key is not an error.
    pub async fn get_user(&self, key: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by key: {}", key);
        let key = parse_user_key(key)?;
        self.repository.find_by_id(key).await
    }

    pub async fn create_user(&self, payload: UserPayload) -> Result<User, ApiError> {
        let fields = payload.into_fields().map_err(|e| {
            warn!("Create rejected: {}", e);
            e
        })?;
        let email = mask_email(&fields.email);

        let key = self.repository.insert(fields.clone()).await?;
        info!("Created user {} ({})", key, email);
        Ok(User::from_fields(key, fields))
    }

    /// Overwrite all fields of an existing user.
    ///
    /// The match and the write happen in a single repository call, so a
    /// concurrent delete surfaces as `UserNotFound` rather than recreating
    /// the record.
    pub async fn update_user(&self, key: &str, payload: UserPayload) -> Result<User, ApiError> {
        let key = parse_user_key(key)?;
        let fields = payload.into_fields().map_err(|e| {
            warn!("Update of {} rejected: {}", key, e);
            e
        })?;

        let user = self
            .repository
            .replace_fields(key, fields)
            .await?
            .ok_or_else(|| {
                warn!("Update failed: User not found with key: {}", key);
                ApiError::UserNotFound
            })?;
        info!("Updated user {}", key);
        Ok(user)
    }

    /// Delete a user. Deleting an unknown key succeeds.
    pub async fn delete_user(&self, key: &str) -> Result<(), ApiError> {
        let key = parse_user_key(key)?;
        let deleted = self.repository.delete(key).await?;
        if deleted == 0 {
            debug!("Delete of {} matched no user", key);
        } else {
            info!("Deleted user {}", key);
        }
        Ok(())
    }

    /// Pick a user uniformly at random from the current collection.
    pub async fn random_user(&self) -> Result<User, ApiError> {
        let total = self.repository.count().await?;
        if total == 0 {
            return Err(ApiError::NoUsers);
        }

        let offset = rand::thread_rng().gen_range(0..total);
        debug!("Picking user at offset {} of {}", offset, total);

        // The collection may have shrunk since the count.
        self.repository
            .find_nth(offset)
            .await?
            .ok_or(ApiError::NoUsers)
    }

    pub async fn ping(&self) -> Result<(), ApiError> {
        self.repository
            .ping()
            .await
            .map_err(|e| ApiError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::{FailingRepository, ShrinkingRepository};
    use crate::repositories::InMemoryUserRepository;
    use mongodb::bson::oid::ObjectId;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn payload(id: i64, email: &str, username: &str) -> UserPayload {
        UserPayload {
            id: Some(id),
            email: Some(email.to_string()),
            username: Some(username.to_string()),
        }
    }

    #[actix_web::test]
    async fn create_then_get_returns_same_fields() {
        let service = service();
        let created = service
            .create_user(payload(1, "a@x.com", "alice"))
            .await
            .expect("create");
        let key = created.key.expect("key").to_hex();

        let fetched = service.get_user(&key).await.expect("get").expect("present");
        assert_eq!(fetched.id, 1);
        assert_eq!(fetched.email, "a@x.com");
        assert_eq!(fetched.username, "alice");
    }

    #[actix_web::test]
    async fn get_unknown_key_is_none() {
        let service = service();
        let fetched = service
            .get_user(&ObjectId::new().to_hex())
            .await
            .expect("get");
        assert!(fetched.is_none());
    }

    #[actix_web::test]
    async fn malformed_key_is_rejected_everywhere() {
        let service = service();
        assert!(matches!(service.get_user("xyz").await, Err(ApiError::InvalidId(_))));
        assert!(matches!(
            service.update_user("xyz", payload(1, "a@x.com", "alice")).await,
            Err(ApiError::InvalidId(_))
        ));
        assert!(matches!(service.delete_user("xyz").await, Err(ApiError::InvalidId(_))));
    }

    #[actix_web::test]
    async fn invalid_payload_stores_nothing() {
        let service = service();
        let result = service
            .create_user(UserPayload {
                id: Some(1),
                email: None,
                username: Some("alice".to_string()),
            })
            .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(service.list_users().await.expect("list").is_empty());
    }

    #[actix_web::test]
    async fn update_overwrites_even_with_identical_values() {
        let service = service();
        let key = service
            .create_user(payload(1, "a@x.com", "alice"))
            .await
            .expect("create")
            .key
            .expect("key")
            .to_hex();

        let same = service
            .update_user(&key, payload(1, "a@x.com", "alice"))
            .await
            .expect("idempotent update");
        assert_eq!(same.username, "alice");

        let changed = service
            .update_user(&key, payload(2, "a2@x.com", "alice2"))
            .await
            .expect("update");
        assert_eq!(changed.id, 2);
        assert_eq!(changed.email, "a2@x.com");
        assert_eq!(changed.username, "alice2");
    }

    #[actix_web::test]
    async fn update_of_missing_user_is_not_found() {
        let service = service();
        let result = service
            .update_user(&ObjectId::new().to_hex(), payload(1, "a@x.com", "alice"))
            .await;
        assert!(matches!(result, Err(ApiError::UserNotFound)));
    }

    #[actix_web::test]
    async fn delete_of_missing_user_succeeds() {
        let service = service();
        service
            .delete_user(&ObjectId::new().to_hex())
            .await
            .expect("delete of absent key");
    }

    #[actix_web::test]
    async fn list_length_tracks_creates_minus_deletes() {
        let service = service();
        let mut keys = Vec::new();
        for i in 0..5 {
            let user = service
                .create_user(payload(i, &format!("u{i}@x.com"), &format!("u{i}")))
                .await
                .expect("create");
            keys.push(user.key.expect("key").to_hex());
        }
        service.delete_user(&keys[0]).await.expect("delete");
        service.delete_user(&keys[3]).await.expect("delete");

        assert_eq!(service.list_users().await.expect("list").len(), 3);
    }

    #[actix_web::test]
    async fn random_user_on_empty_collection_is_no_users() {
        let service = service();
        assert!(matches!(service.random_user().await, Err(ApiError::NoUsers)));
    }

    #[actix_web::test]
    async fn random_user_is_a_member_of_the_collection() {
        let service = service();
        for i in 0..4 {
            service
                .create_user(payload(i, &format!("u{i}@x.com"), &format!("u{i}")))
                .await
                .expect("create");
        }
        let users = service.list_users().await.expect("list");

        for _ in 0..32 {
            let picked = service.random_user().await.expect("random");
            assert!(users.contains(&picked));
        }
    }

    #[actix_web::test]
    async fn random_user_on_shrunk_collection_is_no_users() {
        let service = UserService::new(Arc::new(ShrinkingRepository { count: 3 }));
        assert!(matches!(service.random_user().await, Err(ApiError::NoUsers)));
    }

    #[actix_web::test]
    async fn storage_failures_propagate() {
        let service = UserService::new(Arc::new(FailingRepository));
        assert!(matches!(service.list_users().await, Err(ApiError::Storage(_))));
        assert!(matches!(service.random_user().await, Err(ApiError::Storage(_))));
        assert!(matches!(service.ping().await, Err(ApiError::Unavailable(_))));
    }
}
