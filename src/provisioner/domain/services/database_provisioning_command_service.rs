use async_trait::async_trait;

use crate::provisioner::domain::model::{
    commands::{
        create_provisioned_database_command::CreateProvisionedDatabaseCommand,
        delete_provisioned_database_command::DeleteProvisionedDatabaseCommand,
        deploy_provisioned_database_command::DeployProvisionedDatabaseCommand,
        rotate_provisioned_database_password_command::RotateProvisionedDatabasePasswordCommand,
    },
    entities::{issued_database_credentials::IssuedDatabaseCredentials, server::Server},
    enums::provisioner_domain_error::ProvisionerDomainError,
};

#[async_trait]
pub trait DatabaseProvisioningCommandService: Send + Sync {
    async fn handle_create(
        &self,
        server: &Server,
        command: CreateProvisionedDatabaseCommand,
    ) -> Result<IssuedDatabaseCredentials, ProvisionerDomainError>;

    async fn handle_deploy(
        &self,
        server: &Server,
        command: DeployProvisionedDatabaseCommand,
    ) -> Result<IssuedDatabaseCredentials, ProvisionerDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteProvisionedDatabaseCommand,
    ) -> Result<(), ProvisionerDomainError>;

    async fn handle_rotate_password(
        &self,
        command: RotateProvisionedDatabasePasswordCommand,
    ) -> Result<IssuedDatabaseCredentials, ProvisionerDomainError>;
}
