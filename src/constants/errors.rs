//! Error message constants used throughout the application.

// Random pick errors
pub const ERR_NO_USERS_FOUND: &str = "No users found.";
pub const ERR_SERVER: &str = "Server error while fetching random user.";

// Validation errors
pub const ERR_ID_REQUIRED: &str = "id is required";
pub const ERR_EMAIL_REQUIRED: &str = "email is required";
pub const ERR_USERNAME_REQUIRED: &str = "username is required";

// Infrastructure errors
pub const ERR_DATABASE_UNAVAILABLE: &str = "Database is unreachable";
