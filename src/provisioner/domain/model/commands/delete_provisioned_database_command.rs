use crate::provisioner::domain::model::value_objects::{
    provisioned_database_id::ProvisionedDatabaseId, server_id::ServerId,
};

#[derive(Clone, Debug)]
pub struct DeleteProvisionedDatabaseCommand {
    database_id: ProvisionedDatabaseId,
    server_id: Option<ServerId>,
}

impl DeleteProvisionedDatabaseCommand {
    pub fn new(database_id: ProvisionedDatabaseId) -> Self {
        Self {
            database_id,
            server_id: None,
        }
    }

    /// Rejects records that belong to another server with `DatabaseNotFound`.
    pub fn scoped_to_server(mut self, server_id: ServerId) -> Self {
        self.server_id = Some(server_id);
        self
    }

    pub fn database_id(&self) -> &ProvisionedDatabaseId {
        &self.database_id
    }

    pub fn server_id(&self) -> Option<&ServerId> {
        self.server_id.as_ref()
    }
}
