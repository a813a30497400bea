use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration payload
///
/// Absent fields deserialize to empty strings so they are reported as
/// validation errors instead of body parse errors.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(default)]
pub struct UserStoreRequest {
    /// Client supplied identifier, generated when absent
    #[schema(example = "0658b09c-6fbf-4eff-8aea-3243f837b09a")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[schema(example = "asa")]
    pub name: String,
    #[schema(example = "asa@gmail.com")]
    pub email: String,
    #[schema(example = "rahasia")]
    pub password: String,
}
