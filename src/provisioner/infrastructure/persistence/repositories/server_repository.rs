use async_trait::async_trait;

use crate::provisioner::domain::model::{
    entities::server::Server, enums::provisioner_domain_error::ProvisionerDomainError,
    value_objects::server_id::ServerId,
};

#[async_trait]
pub trait ServerRepository: Send + Sync {
    async fn find_by_id(&self, server_id: &ServerId)
    -> Result<Option<Server>, ProvisionerDomainError>;
}
