use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::provisioner::{
    domain::{
        model::{
            commands::{
                delete_database_host_command::DeleteDatabaseHostCommand,
                register_database_host_command::RegisterDatabaseHostCommand,
            },
            entities::database_host::DatabaseHost,
            enums::provisioner_domain_error::ProvisionerDomainError,
        },
        services::database_host_command_service::DatabaseHostCommandService,
    },
    infrastructure::persistence::repositories::{
        database_administration_repository::DatabaseAdministrationRepository,
        database_host_repository::DatabaseHostRepository,
        provisioned_database_repository::ProvisionedDatabaseRepository,
    },
};

pub struct DatabaseHostCommandServiceImpl {
    host_repository: Arc<dyn DatabaseHostRepository>,
    metadata_repository: Arc<dyn ProvisionedDatabaseRepository>,
    administration_repository: Arc<dyn DatabaseAdministrationRepository>,
}

impl DatabaseHostCommandServiceImpl {
    pub fn new(
        host_repository: Arc<dyn DatabaseHostRepository>,
        metadata_repository: Arc<dyn ProvisionedDatabaseRepository>,
        administration_repository: Arc<dyn DatabaseAdministrationRepository>,
    ) -> Self {
        Self {
            host_repository,
            metadata_repository,
            administration_repository,
        }
    }
}

#[async_trait]
impl DatabaseHostCommandService for DatabaseHostCommandServiceImpl {
    async fn handle_register(
        &self,
        command: RegisterDatabaseHostCommand,
    ) -> Result<DatabaseHost, ProvisionerDomainError> {
        // Refuse hosts we cannot log into.
        self.administration_repository
            .ping(command.connection())
            .await?;

        let host = match self
            .host_repository
            .insert(command.name(), command.connection(), command.node_id())
            .await
        {
            Ok(host) => host,
            Err(error) => {
                self.administration_repository
                    .release(command.connection())
                    .await;
                return Err(error);
            }
        };

        info!(
            database_host_id = host.id().value(),
            name = host.name(),
            "database host registered"
        );

        Ok(host)
    }

    async fn handle_delete(
        &self,
        command: DeleteDatabaseHostCommand,
    ) -> Result<(), ProvisionerDomainError> {
        let host = self
            .host_repository
            .find_by_id(command.database_host_id())
            .await?
            .ok_or(ProvisionerDomainError::DatabaseHostNotFound)?;

        if self
            .metadata_repository
            .count_by_host(command.database_host_id())
            .await?
            > 0
        {
            return Err(ProvisionerDomainError::DatabaseHostHasDatabases);
        }

        self.host_repository
            .delete(command.database_host_id())
            .await?;
        self.administration_repository
            .release(host.connection())
            .await;

        info!(
            database_host_id = command.database_host_id().value(),
            "database host deleted"
        );

        Ok(())
    }
}
