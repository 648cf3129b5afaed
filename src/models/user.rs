use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// `key` is the storage-assigned `_id` used for addressing; `id` is plain
/// payload data supplied by the client and carries no uniqueness guarantee.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub key: Option<ObjectId>,
    pub id: i64,
    pub email: String,
    pub username: String,
}

/// The three client-owned fields of a user, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub id: i64,
    pub email: String,
    pub username: String,
}

impl User {
    pub fn from_fields(key: ObjectId, fields: UserFields) -> Self {
        Self {
            key: Some(key),
            id: fields.id,
            email: fields.email,
            username: fields.username,
        }
    }

    /// Overwrite every client-owned field, keeping the storage key.
    pub fn overwrite(&mut self, fields: UserFields) {
        self.id = fields.id;
        self.email = fields.email;
        self.username = fields.username;
    }
}
