use async_trait::async_trait;

use crate::provisioner::domain::model::{
    entities::database_host::DatabaseHost,
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::{
        database_host_connection::DatabaseHostConnection, database_host_id::DatabaseHostId,
    },
};

#[async_trait]
pub trait DatabaseHostRepository: Send + Sync {
    async fn insert(
        &self,
        name: &str,
        connection: &DatabaseHostConnection,
        node_id: Option<i64>,
    ) -> Result<DatabaseHost, ProvisionerDomainError>;

    async fn find_by_id(
        &self,
        database_host_id: &DatabaseHostId,
    ) -> Result<Option<DatabaseHost>, ProvisionerDomainError>;

    /// Ordered by id.
    async fn list_all(&self) -> Result<Vec<DatabaseHost>, ProvisionerDomainError>;

    async fn delete(&self, database_host_id: &DatabaseHostId)
    -> Result<(), ProvisionerDomainError>;
}
