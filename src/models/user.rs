use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record as stored in the `users` table.
///
/// `id` is `None` until the storage layer assigns one on insert; it is
/// never reassigned afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub upi_id: Option<String>,
}
