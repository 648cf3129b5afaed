//! MongoDB naming defaults.

pub const DEFAULT_DATABASE_NAME: &str = "UserList";
pub const COLLECTION_USERS: &str = "users";
