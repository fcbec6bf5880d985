use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::provisioner::{
    domain::model::{
        entities::provisioned_database::ProvisionedDatabase,
        enums::provisioner_domain_error::ProvisionerDomainError,
        value_objects::{
            database_host_id::DatabaseHostId, database_username::DatabaseUsername,
            provisioned_database_id::ProvisionedDatabaseId,
            provisioned_database_name::ProvisionedDatabaseName,
            remote_access_pattern::RemoteAccessPattern, server_id::ServerId,
        },
    },
    infrastructure::persistence::repositories::provisioned_database_repository::{
        NewProvisionedDatabase, ProvisionedDatabaseRepository,
    },
};

const SELECT_COLUMNS: &str = r#"
    SELECT id, server_id, database_host_id, database_name, username, remote, max_connections, created_at
    FROM server_databases
"#;

pub struct SqlxProvisionedDatabaseRepositoryImpl {
    pool: PgPool,
}

impl SqlxProvisionedDatabaseRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(
        row: sqlx::postgres::PgRow,
    ) -> Result<ProvisionedDatabase, ProvisionerDomainError> {
        let id: i64 = row.try_get("id").map_err(map_infra_error)?;
        let server_id: i64 = row.try_get("server_id").map_err(map_infra_error)?;
        let database_host_id: i64 = row.try_get("database_host_id").map_err(map_infra_error)?;
        let database_name_raw: String = row.try_get("database_name").map_err(map_infra_error)?;
        let username_raw: String = row.try_get("username").map_err(map_infra_error)?;
        let remote_raw: String = row.try_get("remote").map_err(map_infra_error)?;
        let max_connections: Option<i32> = row.try_get("max_connections").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let max_connections = max_connections
            .map(u32::try_from)
            .transpose()
            .map_err(|_| {
                ProvisionerDomainError::InfrastructureError(
                    "stored max_connections is negative".to_string(),
                )
            })?;

        Ok(ProvisionedDatabase::restore(
            ProvisionedDatabaseId::new(id)?,
            ServerId::new(server_id)?,
            DatabaseHostId::new(database_host_id)?,
            ProvisionedDatabaseName::new(database_name_raw)?,
            DatabaseUsername::new(username_raw)?,
            RemoteAccessPattern::new(Some(remote_raw))?,
            max_connections,
            created_at,
        ))
    }
}

#[async_trait]
impl ProvisionedDatabaseRepository for SqlxProvisionedDatabaseRepositoryImpl {
    async fn insert(
        &self,
        database: &NewProvisionedDatabase,
    ) -> Result<ProvisionedDatabase, ProvisionerDomainError> {
        let statement = r#"
            INSERT INTO server_databases (server_id, database_host_id, database_name, username, remote, max_connections)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, server_id, database_host_id, database_name, username, remote, max_connections, created_at
        "#;

        let max_connections = database
            .max_connections
            .map(i32::try_from)
            .transpose()
            .map_err(|_| {
                ProvisionerDomainError::InvalidConnectionLimit(
                    database.max_connections.unwrap_or_default(),
                )
            })?;

        let row = sqlx::query(statement)
            .bind(database.server_id.value())
            .bind(database.database_host_id.value())
            .bind(database.database_name.value())
            .bind(database.username.value())
            .bind(database.remote.value())
            .bind(max_connections)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| {
                let unique_violation = error
                    .as_database_error()
                    .is_some_and(|db_error| db_error.is_unique_violation());
                if unique_violation {
                    ProvisionerDomainError::DuplicateDatabaseName
                } else {
                    map_infra_error(error)
                }
            })?;

        Self::row_to_entity(row)
    }

    async fn find_by_id(
        &self,
        database_id: &ProvisionedDatabaseId,
    ) -> Result<Option<ProvisionedDatabase>, ProvisionerDomainError> {
        let statement = format!("{SELECT_COLUMNS} WHERE id = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(database_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_name(
        &self,
        database_name: &ProvisionedDatabaseName,
    ) -> Result<Option<ProvisionedDatabase>, ProvisionerDomainError> {
        let statement = format!("{SELECT_COLUMNS} WHERE database_name = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(database_name.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn count_by_server(&self, server_id: &ServerId) -> Result<u64, ProvisionerDomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM server_databases WHERE server_id = $1")
            .bind(server_id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let total: i64 = row.try_get("total").map_err(map_infra_error)?;
        Ok(total.max(0) as u64)
    }

    async fn list_by_server(
        &self,
        server_id: &ServerId,
    ) -> Result<Vec<ProvisionedDatabase>, ProvisionerDomainError> {
        let statement = format!("{SELECT_COLUMNS} WHERE server_id = $1 ORDER BY id");

        let rows = sqlx::query(&statement)
            .bind(server_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn count_by_host(
        &self,
        database_host_id: &DatabaseHostId,
    ) -> Result<u64, ProvisionerDomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total FROM server_databases WHERE database_host_id = $1",
        )
        .bind(database_host_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_infra_error)?;

        let total: i64 = row.try_get("total").map_err(map_infra_error)?;
        Ok(total.max(0) as u64)
    }

    async fn delete(
        &self,
        database_id: &ProvisionedDatabaseId,
    ) -> Result<(), ProvisionerDomainError> {
        sqlx::query("DELETE FROM server_databases WHERE id = $1")
            .bind(database_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }
}

fn map_infra_error(error: sqlx::Error) -> ProvisionerDomainError {
    ProvisionerDomainError::InfrastructureError(error.to_string())
}
