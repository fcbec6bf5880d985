use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::value_objects::{
    provisioned_database_name::ProvisionedDatabaseName, server_id::ServerId,
};

#[derive(Clone, Debug)]
pub struct ProvisionedDatabaseDeletedEvent {
    pub server_id: ServerId,
    pub database_name: ProvisionedDatabaseName,
    pub occurred_at: DateTime<Utc>,
}

impl ProvisionedDatabaseDeletedEvent {
    pub fn new(
        server_id: ServerId,
        database_name: ProvisionedDatabaseName,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            server_id,
            database_name,
            occurred_at,
        }
    }
}
