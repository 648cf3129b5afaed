//! MongoDB adapter for the users collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::errors::ApiError;
use crate::models::{User, UserFields};
use crate::repositories::UserRepository;

/// Repository for user documents stored in MongoDB.
pub struct MongoUserRepository {
    database: Database,
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            database: db.clone(),
            collection: db.collection(collection_name),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Finding all users");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, key: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by key: {}", key);
        Ok(self.collection.find_one(doc! { "_id": key }).await?)
    }

    async fn insert(&self, fields: UserFields) -> Result<ObjectId, ApiError> {
        let user = User {
            key: None,
            id: fields.id,
            email: fields.email,
            username: fields.username,
        };
        let result = self.collection.insert_one(&user).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            ApiError::Storage(format!(
                "inserted _id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn replace_fields(
        &self,
        key: ObjectId,
        fields: UserFields,
    ) -> Result<Option<User>, ApiError> {
        debug!("Repository: Replacing fields of user: {}", key);
        Ok(self
            .collection
            .find_one_and_update(
                doc! { "_id": key },
                doc! {
                    "$set": {
                        "id": fields.id,
                        "email": fields.email,
                        "username": fields.username,
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, key: ObjectId) -> Result<u64, ApiError> {
        debug!("Repository: Deleting user: {}", key);
        let result = self.collection.delete_one(doc! { "_id": key }).await?;
        Ok(result.deleted_count)
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn find_nth(&self, offset: u64) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user at offset: {}", offset);
        Ok(self.collection.find_one(doc! {}).skip(offset).await?)
    }

    async fn ping(&self) -> Result<(), ApiError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
