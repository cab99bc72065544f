//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses.
///
/// Optional fields are serialized as explicit `null` so the wire shape of
/// a record is stable across requests.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User's display name
    #[schema(example = "Alice")]
    pub name: String,
    /// User's email address
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// User's phone number
    #[schema(example = "555-1234")]
    pub phone_number: Option<String>,
    /// User's UPI payment identifier
    #[schema(example = "alice@upi")]
    pub upi_id: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            upi_id: user.upi_id,
        }
    }
}
