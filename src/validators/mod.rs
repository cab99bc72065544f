//! Request validation helpers.

pub mod user;

pub use user::*;

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Extracts the individual rule messages from [`ValidationErrors`] so the
/// transport layer can report every failed field in one response.
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}
