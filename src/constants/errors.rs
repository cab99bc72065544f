//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";

// Validation errors
pub const ERR_NAME_REQUIRED: &str = "Name is required";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_INVALID_EMAIL_FORMAT: &str = "Invalid email format";
