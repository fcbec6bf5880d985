use async_trait::async_trait;

use crate::provisioner::domain::model::{
    enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::{
        database_host_connection::DatabaseHostConnection, database_password::DatabasePassword,
        database_username::DatabaseUsername, provisioned_database_name::ProvisionedDatabaseName,
        remote_access_pattern::RemoteAccessPattern,
    },
};

/// Administrative operations against the engine running on one database host.
///
/// Changes to users and grants are buffered by the engine until [`flush`] is
/// called. Every error is reported as `RemoteProvisioningError`.
///
/// [`flush`]: DatabaseAdministrationRepository::flush
#[async_trait]
pub trait DatabaseAdministrationRepository: Send + Sync {
    async fn ping(&self, host: &DatabaseHostConnection) -> Result<(), ProvisionerDomainError>;

    async fn create_database(
        &self,
        host: &DatabaseHostConnection,
        database_name: &ProvisionedDatabaseName,
    ) -> Result<(), ProvisionerDomainError>;

    async fn create_user(
        &self,
        host: &DatabaseHostConnection,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
        password: &DatabasePassword,
        max_connections: Option<u32>,
    ) -> Result<(), ProvisionerDomainError>;

    async fn assign_user_to_database(
        &self,
        host: &DatabaseHostConnection,
        database_name: &ProvisionedDatabaseName,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
    ) -> Result<(), ProvisionerDomainError>;

    async fn update_user_password(
        &self,
        host: &DatabaseHostConnection,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
        password: &DatabasePassword,
    ) -> Result<(), ProvisionerDomainError>;

    async fn drop_user(
        &self,
        host: &DatabaseHostConnection,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
    ) -> Result<(), ProvisionerDomainError>;

    async fn drop_database(
        &self,
        host: &DatabaseHostConnection,
        database_name: &ProvisionedDatabaseName,
    ) -> Result<(), ProvisionerDomainError>;

    /// Safe to call when nothing is pending.
    async fn flush(&self, host: &DatabaseHostConnection) -> Result<(), ProvisionerDomainError>;

    /// Forgets any cached connection to the host. Does nothing when none exists.
    async fn release(&self, host: &DatabaseHostConnection);
}
