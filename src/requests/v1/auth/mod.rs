use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "asa@gmail.com")]
    pub email: String,
    #[schema(example = "rahasia")]
    pub password: String,
}
