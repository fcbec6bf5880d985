use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::value_objects::{
    database_host_id::DatabaseHostId, database_username::DatabaseUsername,
    provisioned_database_id::ProvisionedDatabaseId,
    provisioned_database_name::ProvisionedDatabaseName,
    remote_access_pattern::RemoteAccessPattern, server_id::ServerId,
};

/// Metadata record for a database that exists on a host. A record is only
/// written once the remote database, user and grant have been flushed.
#[derive(Clone, Debug)]
pub struct ProvisionedDatabase {
    id: ProvisionedDatabaseId,
    server_id: ServerId,
    database_host_id: DatabaseHostId,
    database_name: ProvisionedDatabaseName,
    username: DatabaseUsername,
    remote: RemoteAccessPattern,
    max_connections: Option<u32>,
    created_at: DateTime<Utc>,
}

impl ProvisionedDatabase {
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: ProvisionedDatabaseId,
        server_id: ServerId,
        database_host_id: DatabaseHostId,
        database_name: ProvisionedDatabaseName,
        username: DatabaseUsername,
        remote: RemoteAccessPattern,
        max_connections: Option<u32>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            server_id,
            database_host_id,
            database_name,
            username,
            remote,
            max_connections,
            created_at,
        }
    }

    pub fn id(&self) -> &ProvisionedDatabaseId {
        &self.id
    }

    pub fn server_id(&self) -> &ServerId {
        &self.server_id
    }

    pub fn database_host_id(&self) -> &DatabaseHostId {
        &self.database_host_id
    }

    pub fn database_name(&self) -> &ProvisionedDatabaseName {
        &self.database_name
    }

    pub fn username(&self) -> &DatabaseUsername {
        &self.username
    }

    pub fn remote(&self) -> &RemoteAccessPattern {
        &self.remote
    }

    pub fn max_connections(&self) -> Option<u32> {
        self.max_connections
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, server_id: &ServerId) -> bool {
        &self.server_id == server_id
    }
}
