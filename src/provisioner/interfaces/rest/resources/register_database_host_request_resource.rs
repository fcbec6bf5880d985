use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterDatabaseHostRequestResource {
    #[validate(length(min = 1, max = 191))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub host: String,

    #[validate(range(min = 1))]
    pub port: u16,

    #[validate(length(min = 1, max = 191))]
    pub username: String,

    pub password: String,

    pub node_id: Option<i64>,
}
