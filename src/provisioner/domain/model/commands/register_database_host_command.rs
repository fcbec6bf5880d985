use crate::provisioner::domain::model::{
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::database_host_connection::DatabaseHostConnection,
};

#[derive(Clone, Debug)]
pub struct RegisterDatabaseHostCommand {
    name: String,
    connection: DatabaseHostConnection,
    node_id: Option<i64>,
}

impl RegisterDatabaseHostCommand {
    pub fn new(
        name: String,
        address: String,
        port: u16,
        username: String,
        password: String,
        node_id: Option<i64>,
    ) -> Result<Self, ProvisionerDomainError> {
        let name = name.trim().to_string();
        if name.is_empty() || name.len() > 191 {
            return Err(ProvisionerDomainError::InvalidDatabaseHost(
                "name must be 1..191 characters".to_string(),
            ));
        }

        Ok(Self {
            name,
            connection: DatabaseHostConnection::new(address, port, username, password)?,
            node_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> &DatabaseHostConnection {
        &self.connection
    }

    pub fn node_id(&self) -> Option<i64> {
        self.node_id
    }
}
