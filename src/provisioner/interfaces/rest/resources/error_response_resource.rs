use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponseResource {
    /// Stable machine-readable kind, e.g. `duplicate_database_name`.
    pub code: String,
    pub message: String,
}
