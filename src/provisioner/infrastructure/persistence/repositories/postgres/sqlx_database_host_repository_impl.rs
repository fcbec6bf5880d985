use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::provisioner::{
    domain::model::{
        entities::database_host::DatabaseHost,
        enums::provisioner_domain_error::ProvisionerDomainError,
        value_objects::{
            database_host_connection::DatabaseHostConnection, database_host_id::DatabaseHostId,
        },
    },
    infrastructure::persistence::repositories::database_host_repository::DatabaseHostRepository,
};

pub struct SqlxDatabaseHostRepositoryImpl {
    pool: PgPool,
}

impl SqlxDatabaseHostRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<DatabaseHost, ProvisionerDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let name: String = row.try_get("name").map_err(map_infra_error)?;
        let address: String = row.try_get("host").map_err(map_infra_error)?;
        let port: i32 = row.try_get("port").map_err(map_infra_error)?;
        let username: String = row.try_get("username").map_err(map_infra_error)?;
        let password: String = row.try_get("password").map_err(map_infra_error)?;
        let node_id: Option<i64> = row.try_get("node_id").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        let port = u16::try_from(port).map_err(|_| {
            ProvisionerDomainError::InfrastructureError("stored port out of range".to_string())
        })?;

        Ok(DatabaseHost::restore(
            DatabaseHostId::new(id)?,
            name,
            DatabaseHostConnection::new(address, port, username, password)?,
            node_id,
            created_at,
        ))
    }
}

#[async_trait]
impl DatabaseHostRepository for SqlxDatabaseHostRepositoryImpl {
    async fn insert(
        &self,
        name: &str,
        connection: &DatabaseHostConnection,
        node_id: Option<i64>,
    ) -> Result<DatabaseHost, ProvisionerDomainError> {
        let statement = r#"
            INSERT INTO database_hosts (name, host, port, username, password, node_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, host, port, username, password, node_id, created_at
        "#;

        let row = sqlx::query(statement)
            .bind(name)
            .bind(connection.address())
            .bind(i32::from(connection.port()))
            .bind(connection.username())
            .bind(connection.password())
            .bind(node_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Self::row_to_entity(row)
    }

    async fn find_by_id(
        &self,
        database_host_id: &DatabaseHostId,
    ) -> Result<Option<DatabaseHost>, ProvisionerDomainError> {
        let statement = r#"
            SELECT id, name, host, port, username, password, node_id, created_at
            FROM database_hosts
            WHERE id = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(database_host_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list_all(&self) -> Result<Vec<DatabaseHost>, ProvisionerDomainError> {
        let statement = r#"
            SELECT id, name, host, port, username, password, node_id, created_at
            FROM database_hosts
            ORDER BY id
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn delete(
        &self,
        database_host_id: &DatabaseHostId,
    ) -> Result<(), ProvisionerDomainError> {
        sqlx::query("DELETE FROM database_hosts WHERE id = $1")
            .bind(database_host_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }
}

fn map_infra_error(error: sqlx::Error) -> ProvisionerDomainError {
    ProvisionerDomainError::InfrastructureError(error.to_string())
}
