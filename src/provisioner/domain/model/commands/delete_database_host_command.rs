use crate::provisioner::domain::model::value_objects::database_host_id::DatabaseHostId;

#[derive(Clone, Debug)]
pub struct DeleteDatabaseHostCommand {
    database_host_id: DatabaseHostId,
}

impl DeleteDatabaseHostCommand {
    pub fn new(database_host_id: DatabaseHostId) -> Self {
        Self { database_host_id }
    }

    pub fn database_host_id(&self) -> &DatabaseHostId {
        &self.database_host_id
    }
}
