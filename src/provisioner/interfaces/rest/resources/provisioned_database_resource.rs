use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProvisionedDatabaseResource {
    pub id: i64,
    pub server_id: i64,
    pub database_host_id: i64,
    pub database: String,
    pub username: String,
    pub remote: String,
    pub max_connections: Option<u32>,
    pub created_at: String,
}

/// Returned on create and password rotation only.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct IssuedDatabaseCredentialsResource {
    #[serde(flatten)]
    pub database: ProvisionedDatabaseResource,
    pub password: String,
}
