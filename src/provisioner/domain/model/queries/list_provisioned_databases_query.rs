use crate::provisioner::domain::model::value_objects::server_id::ServerId;

#[derive(Clone, Debug)]
pub struct ListProvisionedDatabasesQuery {
    server_id: ServerId,
}

impl ListProvisionedDatabasesQuery {
    pub fn new(server_id: ServerId) -> Self {
        Self { server_id }
    }

    pub fn server_id(&self) -> &ServerId {
        &self.server_id
    }
}
