use async_trait::async_trait;

use crate::provisioner::domain::model::{
    entities::provisioned_database::ProvisionedDatabase,
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::{
        database_host_id::DatabaseHostId, database_username::DatabaseUsername,
        provisioned_database_id::ProvisionedDatabaseId,
        provisioned_database_name::ProvisionedDatabaseName,
        remote_access_pattern::RemoteAccessPattern, server_id::ServerId,
    },
};

/// Row to insert; the store assigns `id` and `created_at`.
#[derive(Clone, Debug)]
pub struct NewProvisionedDatabase {
    pub server_id: ServerId,
    pub database_host_id: DatabaseHostId,
    pub database_name: ProvisionedDatabaseName,
    pub username: DatabaseUsername,
    pub remote: RemoteAccessPattern,
    pub max_connections: Option<u32>,
}

#[async_trait]
pub trait ProvisionedDatabaseRepository: Send + Sync {
    /// Fails with `DuplicateDatabaseName` when the name is already taken on any host.
    async fn insert(
        &self,
        database: &NewProvisionedDatabase,
    ) -> Result<ProvisionedDatabase, ProvisionerDomainError>;

    async fn find_by_id(
        &self,
        database_id: &ProvisionedDatabaseId,
    ) -> Result<Option<ProvisionedDatabase>, ProvisionerDomainError>;

    async fn find_by_name(
        &self,
        database_name: &ProvisionedDatabaseName,
    ) -> Result<Option<ProvisionedDatabase>, ProvisionerDomainError>;

    async fn count_by_server(&self, server_id: &ServerId) -> Result<u64, ProvisionerDomainError>;

    async fn list_by_server(
        &self,
        server_id: &ServerId,
    ) -> Result<Vec<ProvisionedDatabase>, ProvisionerDomainError>;

    async fn count_by_host(
        &self,
        database_host_id: &DatabaseHostId,
    ) -> Result<u64, ProvisionerDomainError>;

    async fn delete(&self, database_id: &ProvisionedDatabaseId)
    -> Result<(), ProvisionerDomainError>;
}
