use async_trait::async_trait;

use crate::provisioner::domain::model::{
    entities::database_host::DatabaseHost, enums::provisioner_domain_error::ProvisionerDomainError,
};

#[async_trait]
pub trait DatabaseHostQueryService: Send + Sync {
    async fn handle_list(&self) -> Result<Vec<DatabaseHost>, ProvisionerDomainError>;
}
