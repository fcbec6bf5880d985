use std::sync::Arc;

use server_database_provisioner::{
    config::provisioning_settings::ProvisioningSettings,
    provisioner::{
        application::{
            command_services::{
                database_host_command_service_impl::DatabaseHostCommandServiceImpl,
                database_provisioning_command_service_impl::DatabaseProvisioningCommandServiceImpl,
            },
            query_services::{
                database_host_query_service_impl::DatabaseHostQueryServiceImpl,
                database_provisioning_query_service_impl::DatabaseProvisioningQueryServiceImpl,
            },
        },
        domain::services::{
            database_provisioning_command_service::DatabaseProvisioningCommandService,
            database_provisioning_query_service::DatabaseProvisioningQueryService,
        },
        interfaces::rest::controllers::provisioner_rest_controller::ProvisionerRestControllerState,
    },
};

use super::fakes::{
    FakeAdministrationRepository, FakeAuditEventRepository, FakeHostRepository,
    FakeMetadataRepository, FakeServerRepository,
};

pub struct ProvisioningTestHarness {
    pub metadata_repository: Arc<FakeMetadataRepository>,
    pub host_repository: Arc<FakeHostRepository>,
    pub administration_repository: Arc<FakeAdministrationRepository>,
    pub audit_repository: Arc<FakeAuditEventRepository>,
    pub server_repository: Arc<FakeServerRepository>,
    pub settings: ProvisioningSettings,
    pub service: DatabaseProvisioningCommandServiceImpl,
    pub query_service: DatabaseProvisioningQueryServiceImpl,
    pub host_service: DatabaseHostCommandServiceImpl,
    pub host_query_service: DatabaseHostQueryServiceImpl,
}

pub fn create_harness(settings: ProvisioningSettings) -> ProvisioningTestHarness {
    let metadata_repository = Arc::new(FakeMetadataRepository::new());
    let host_repository = Arc::new(FakeHostRepository::new());
    let administration_repository = Arc::new(FakeAdministrationRepository::new());
    let audit_repository = Arc::new(FakeAuditEventRepository::new());
    let server_repository = Arc::new(FakeServerRepository::new());

    let service = DatabaseProvisioningCommandServiceImpl::new(
        metadata_repository.clone(),
        host_repository.clone(),
        administration_repository.clone(),
        audit_repository.clone(),
        settings,
    );
    let query_service = DatabaseProvisioningQueryServiceImpl::new(metadata_repository.clone());
    let host_service = DatabaseHostCommandServiceImpl::new(
        host_repository.clone(),
        metadata_repository.clone(),
        administration_repository.clone(),
    );
    let host_query_service = DatabaseHostQueryServiceImpl::new(host_repository.clone());

    ProvisioningTestHarness {
        metadata_repository,
        host_repository,
        administration_repository,
        audit_repository,
        server_repository,
        settings,
        service,
        query_service,
        host_service,
        host_query_service,
    }
}

pub fn default_harness() -> ProvisioningTestHarness {
    create_harness(ProvisioningSettings::default())
}

impl ProvisioningTestHarness {
    /// Controller state backed by the same fakes as the services above.
    pub fn rest_state(&self) -> ProvisionerRestControllerState {
        let command_service: Arc<dyn DatabaseProvisioningCommandService> =
            Arc::new(DatabaseProvisioningCommandServiceImpl::new(
                self.metadata_repository.clone(),
                self.host_repository.clone(),
                self.administration_repository.clone(),
                self.audit_repository.clone(),
                self.settings,
            ));
        let query_service: Arc<dyn DatabaseProvisioningQueryService> = Arc::new(
            DatabaseProvisioningQueryServiceImpl::new(self.metadata_repository.clone()),
        );

        ProvisionerRestControllerState {
            command_service,
            query_service,
            server_repository: self.server_repository.clone(),
            settings: self.settings,
        }
    }
}
