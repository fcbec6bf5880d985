use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::provisioner::{
    domain::model::{
        entities::server::Server, enums::provisioner_domain_error::ProvisionerDomainError,
        value_objects::server_id::ServerId,
    },
    infrastructure::persistence::repositories::server_repository::ServerRepository,
};

pub struct SqlxServerRepositoryImpl {
    pool: PgPool,
}

impl SqlxServerRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServerRepository for SqlxServerRepositoryImpl {
    async fn find_by_id(
        &self,
        server_id: &ServerId,
    ) -> Result<Option<Server>, ProvisionerDomainError> {
        let maybe_row = sqlx::query(
            r#"
            SELECT id, node_id, database_limit
            FROM servers
            WHERE id = $1
            "#,
        )
        .bind(server_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProvisionerDomainError::InfrastructureError(e.to_string()))?;

        let Some(row) = maybe_row else {
            return Ok(None);
        };

        let node_id: i64 = row
            .try_get("node_id")
            .map_err(|e| ProvisionerDomainError::InfrastructureError(e.to_string()))?;
        let database_limit: Option<i32> = row
            .try_get("database_limit")
            .map_err(|e| ProvisionerDomainError::InfrastructureError(e.to_string()))?;

        Ok(Some(Server::new(
            *server_id,
            node_id,
            database_limit.map(|limit| limit.max(0) as u32),
        )))
    }
}
