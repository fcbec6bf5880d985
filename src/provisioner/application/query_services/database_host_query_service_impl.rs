use std::sync::Arc;

use async_trait::async_trait;

use crate::provisioner::{
    domain::{
        model::{
            entities::database_host::DatabaseHost,
            enums::provisioner_domain_error::ProvisionerDomainError,
        },
        services::database_host_query_service::DatabaseHostQueryService,
    },
    infrastructure::persistence::repositories::database_host_repository::DatabaseHostRepository,
};

pub struct DatabaseHostQueryServiceImpl {
    host_repository: Arc<dyn DatabaseHostRepository>,
}

impl DatabaseHostQueryServiceImpl {
    pub fn new(host_repository: Arc<dyn DatabaseHostRepository>) -> Self {
        Self { host_repository }
    }
}

#[async_trait]
impl DatabaseHostQueryService for DatabaseHostQueryServiceImpl {
    async fn handle_list(&self) -> Result<Vec<DatabaseHost>, ProvisionerDomainError> {
        self.host_repository.list_all().await
    }
}
