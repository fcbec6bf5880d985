use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DeployProvisionedDatabaseRequestResource {
    /// Free-form label; the server prefix is added for you.
    pub database: String,

    pub remote: Option<String>,
}
