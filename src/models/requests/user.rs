//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_email_format, validate_required_name};

/// Request payload for registering a new user
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// User's display name
    #[validate(custom(function = "validate_required_name"))]
    #[schema(example = "Alice")]
    pub name: String,
    /// User's email address, unique across all users
    #[validate(custom(function = "validate_email_format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Phone number
    #[schema(example = "555-1234")]
    pub phone_number: Option<String>,
    /// UPI payment identifier
    #[schema(example = "alice@upi")]
    pub upi_id: Option<String>,
}

/// Request payload for partially updating a user.
///
/// Absent fields leave the stored value unchanged; present fields are
/// applied as-is. Email changes are re-checked for uniqueness by the
/// service before they are applied.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New display name
    #[schema(example = "Alice B.")]
    pub name: Option<String>,
    /// New email address
    #[schema(example = "alice.b@example.com")]
    pub email: Option<String>,
    /// New phone number
    #[schema(example = "555-1234")]
    pub phone_number: Option<String>,
    /// New UPI payment identifier
    #[schema(example = "alice@upi")]
    pub upi_id: Option<String>,
}
