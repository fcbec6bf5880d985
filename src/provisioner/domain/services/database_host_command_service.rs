use async_trait::async_trait;

use crate::provisioner::domain::model::{
    commands::{
        delete_database_host_command::DeleteDatabaseHostCommand,
        register_database_host_command::RegisterDatabaseHostCommand,
    },
    entities::database_host::DatabaseHost,
    enums::provisioner_domain_error::ProvisionerDomainError,
};

#[async_trait]
pub trait DatabaseHostCommandService: Send + Sync {
    async fn handle_register(
        &self,
        command: RegisterDatabaseHostCommand,
    ) -> Result<DatabaseHost, ProvisionerDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteDatabaseHostCommand,
    ) -> Result<(), ProvisionerDomainError>;
}
