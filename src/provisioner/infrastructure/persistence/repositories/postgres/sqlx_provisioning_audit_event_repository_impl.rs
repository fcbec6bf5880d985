use async_trait::async_trait;
use sqlx::PgPool;

use crate::provisioner::{
    domain::model::{
        enums::provisioner_domain_error::ProvisionerDomainError,
        value_objects::{database_username::DatabaseUsername, server_id::ServerId},
    },
    infrastructure::persistence::repositories::provisioning_audit_event_repository::{
        ProvisioningAuditEventRecord, ProvisioningAuditEventRepository,
    },
};

pub struct SqlxProvisioningAuditEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxProvisioningAuditEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProvisioningAuditEventRepository for SqlxProvisioningAuditEventRepositoryImpl {
    async fn save_event(
        &self,
        event: &ProvisioningAuditEventRecord,
    ) -> Result<(), ProvisionerDomainError> {
        let statement = r#"
            INSERT INTO provisioning_audit_events (
                event_name,
                server_id,
                database_name,
                username,
                error_message,
                occurred_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(statement)
            .bind(event.event_name().as_str())
            .bind(event.server_id().map(ServerId::value))
            .bind(event.database_name().value())
            .bind(event.username().map(DatabaseUsername::value))
            .bind(event.error_message())
            .bind(event.occurred_at())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                ProvisionerDomainError::InfrastructureError(format!(
                    "failed to record audit event {}: {e}",
                    event.event_name()
                ))
            })?;

        Ok(())
    }
}
