use crate::provisioner::domain::model::value_objects::database_host_id::DatabaseHostId;

/// Largest per-user connection limit the metadata store can hold.
pub const MAX_CONNECTION_LIMIT: u32 = i32::MAX as u32;

/// Raw create request. The name and remote pattern are validated by the
/// command service, after the feature gate and the limit check.
#[derive(Clone, Debug)]
pub struct CreateProvisionedDatabaseCommand {
    database: Option<String>,
    remote: Option<String>,
    database_host_id: DatabaseHostId,
    max_connections: Option<u32>,
    enforce_database_limit: bool,
}

impl CreateProvisionedDatabaseCommand {
    pub fn new(
        database: Option<String>,
        remote: Option<String>,
        database_host_id: DatabaseHostId,
        max_connections: Option<u32>,
    ) -> Self {
        Self {
            database,
            remote,
            database_host_id,
            max_connections,
            enforce_database_limit: true,
        }
    }

    /// Skips the per-server database limit. Only for trusted internal callers.
    pub fn without_limit_enforcement(mut self) -> Self {
        self.enforce_database_limit = false;
        self
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    pub fn database_host_id(&self) -> &DatabaseHostId {
        &self.database_host_id
    }

    pub fn max_connections(&self) -> Option<u32> {
        self.max_connections
    }

    pub fn enforce_database_limit(&self) -> bool {
        self.enforce_database_limit
    }
}
