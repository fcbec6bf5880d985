use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::{
    enums::{
        provisioner_domain_error::ProvisionerDomainError,
        provisioning_audit_event_name::ProvisioningAuditEventName,
    },
    value_objects::{
        database_username::DatabaseUsername, provisioned_database_name::ProvisionedDatabaseName,
        server_id::ServerId,
    },
};

/// One row of the provisioning audit trail. Never carries a password.
#[derive(Clone, Debug)]
pub struct ProvisioningAuditEventRecord {
    event_name: ProvisioningAuditEventName,
    server_id: Option<ServerId>,
    database_name: ProvisionedDatabaseName,
    username: Option<DatabaseUsername>,
    error_message: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl ProvisioningAuditEventRecord {
    pub fn new(
        event_name: ProvisioningAuditEventName,
        database_name: ProvisionedDatabaseName,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_name,
            server_id: None,
            database_name,
            username: None,
            error_message: None,
            occurred_at,
        }
    }

    pub fn for_server(mut self, server_id: ServerId) -> Self {
        self.server_id = Some(server_id);
        self
    }

    pub fn with_username(mut self, username: DatabaseUsername) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_error(mut self, error: &ProvisionerDomainError) -> Self {
        self.error_message = Some(error.to_string());
        self
    }

    pub fn event_name(&self) -> ProvisioningAuditEventName {
        self.event_name
    }

    pub fn server_id(&self) -> Option<&ServerId> {
        self.server_id.as_ref()
    }

    pub fn database_name(&self) -> &ProvisionedDatabaseName {
        &self.database_name
    }

    pub fn username(&self) -> Option<&DatabaseUsername> {
        self.username.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[async_trait]
pub trait ProvisioningAuditEventRepository: Send + Sync {
    async fn save_event(
        &self,
        event: &ProvisioningAuditEventRecord,
    ) -> Result<(), ProvisionerDomainError>;
}
