use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Name and remote pattern are checked by the command service, after the
/// feature gate and the database limit.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateProvisionedDatabaseRequestResource {
    /// Full physical name, `s{server_id}_{label}`.
    pub database: Option<String>,

    /// Host pattern the user may connect from. Empty or absent means `%`.
    pub remote: Option<String>,

    #[validate(range(min = 1))]
    pub database_host_id: i64,

    #[validate(range(min = 1, max = 2147483647))]
    pub max_connections: Option<u32>,
}
