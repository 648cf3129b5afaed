//! Success message constants used throughout the application.

// User management messages
pub const MSG_USERS_ADDED: &str = "Users added!";
pub const MSG_USERS_UPDATED: &str = "Users updated!";
pub const MSG_USERS_DELETED: &str = "Users deleted.";

// Health messages
pub const MSG_SERVER_RUNNING: &str = "Server is running";
