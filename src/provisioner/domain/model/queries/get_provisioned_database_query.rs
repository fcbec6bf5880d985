use crate::provisioner::domain::model::value_objects::{
    provisioned_database_id::ProvisionedDatabaseId, server_id::ServerId,
};

#[derive(Clone, Debug)]
pub struct GetProvisionedDatabaseQuery {
    server_id: ServerId,
    database_id: ProvisionedDatabaseId,
}

impl GetProvisionedDatabaseQuery {
    pub fn new(server_id: ServerId, database_id: ProvisionedDatabaseId) -> Self {
        Self {
            server_id,
            database_id,
        }
    }

    pub fn server_id(&self) -> &ServerId {
        &self.server_id
    }

    pub fn database_id(&self) -> &ProvisionedDatabaseId {
        &self.database_id
    }
}
