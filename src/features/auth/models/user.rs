use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A logged-in community member
///
/// The role is stored exactly as the client reported it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// One of: volunteer, ngo, needsHelp
    pub role: String,
    pub is_authenticated: bool,
}
