use std::sync::Arc;

use async_trait::async_trait;

use crate::provisioner::{
    domain::{
        model::{
            entities::provisioned_database::ProvisionedDatabase,
            enums::provisioner_domain_error::ProvisionerDomainError,
            queries::{
                get_provisioned_database_query::GetProvisionedDatabaseQuery,
                list_provisioned_databases_query::ListProvisionedDatabasesQuery,
            },
        },
        services::database_provisioning_query_service::DatabaseProvisioningQueryService,
    },
    infrastructure::persistence::repositories::provisioned_database_repository::ProvisionedDatabaseRepository,
};

pub struct DatabaseProvisioningQueryServiceImpl {
    metadata_repository: Arc<dyn ProvisionedDatabaseRepository>,
}

impl DatabaseProvisioningQueryServiceImpl {
    pub fn new(metadata_repository: Arc<dyn ProvisionedDatabaseRepository>) -> Self {
        Self {
            metadata_repository,
        }
    }
}

#[async_trait]
impl DatabaseProvisioningQueryService for DatabaseProvisioningQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListProvisionedDatabasesQuery,
    ) -> Result<Vec<ProvisionedDatabase>, ProvisionerDomainError> {
        self.metadata_repository
            .list_by_server(query.server_id())
            .await
    }

    async fn handle_get(
        &self,
        query: GetProvisionedDatabaseQuery,
    ) -> Result<ProvisionedDatabase, ProvisionerDomainError> {
        self.metadata_repository
            .find_by_id(query.database_id())
            .await?
            .filter(|database| database.is_owned_by(query.server_id()))
            .ok_or(ProvisionerDomainError::DatabaseNotFound)
    }
}
