use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::value_objects::{
    database_host_id::DatabaseHostId, database_username::DatabaseUsername,
    provisioned_database_name::ProvisionedDatabaseName, server_id::ServerId,
};

#[derive(Clone, Debug)]
pub struct ProvisionedDatabaseCreatedEvent {
    pub server_id: ServerId,
    pub database_host_id: DatabaseHostId,
    pub database_name: ProvisionedDatabaseName,
    pub username: DatabaseUsername,
    pub occurred_at: DateTime<Utc>,
}

impl ProvisionedDatabaseCreatedEvent {
    pub fn new(
        server_id: ServerId,
        database_host_id: DatabaseHostId,
        database_name: ProvisionedDatabaseName,
        username: DatabaseUsername,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            server_id,
            database_host_id,
            database_name,
            username,
            occurred_at,
        }
    }
}
