//! User-related custom validators.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{ERR_EMAIL_REQUIRED, ERR_INVALID_EMAIL_FORMAT, ERR_NAME_REQUIRED};

lazy_static! {
    // Deliberately loose: one '@' with a non-empty local part and domain.
    static ref EMAIL_FORMAT: Regex = Regex::new(r"^[A-Za-z0-9+_.-]+@(.+)$").unwrap();
}

/// Validates that the name is non-empty after trimming whitespace.
pub fn validate_required_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("name_required");
        error.message = Some(ERR_NAME_REQUIRED.into());
        return Err(error);
    }
    Ok(())
}

/// Validates that the email is present and shaped like `local-part@domain`.
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        let mut error = ValidationError::new("email_required");
        error.message = Some(ERR_EMAIL_REQUIRED.into());
        return Err(error);
    }

    if !EMAIL_FORMAT.is_match(email) {
        let mut error = ValidationError::new("invalid_email");
        error.message = Some(ERR_INVALID_EMAIL_FORMAT.into());
        return Err(error);
    }

    Ok(())
}
