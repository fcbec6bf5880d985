use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use sqlx::{
    Executor, MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};
use tracing::{debug, info};

use crate::provisioner::{
    domain::model::{
        enums::provisioner_domain_error::ProvisionerDomainError,
        value_objects::{
            database_host_connection::DatabaseHostConnection, database_password::DatabasePassword,
            database_username::DatabaseUsername,
            provisioned_database_name::ProvisionedDatabaseName,
            remote_access_pattern::RemoteAccessPattern,
        },
    },
    infrastructure::persistence::repositories::{
        database_administration_repository::DatabaseAdministrationRepository,
        mysql::host_pool_cache::HostPoolCache,
    },
};

const GRANTED_PRIVILEGES: &str = "SELECT, INSERT, UPDATE, DELETE, CREATE, DROP, ALTER, INDEX, \
    EXECUTE, CREATE VIEW, SHOW VIEW, CREATE ROUTINE, ALTER ROUTINE, EVENT, TRIGGER, REFERENCES, \
    LOCK TABLES, CREATE TEMPORARY TABLES";

/// Talks to MySQL/MariaDB hosts with the host's administrative login.
pub struct SqlxMySqlDatabaseAdministrationRepositoryImpl {
    pools: Arc<HostPoolCache<MySqlPool>>,
    connect_timeout: Duration,
}

impl SqlxMySqlDatabaseAdministrationRepositoryImpl {
    pub fn new(connect_timeout: Duration) -> Self {
        Self {
            pools: Arc::new(HostPoolCache::new()),
            connect_timeout,
        }
    }

    async fn pool_for(
        &self,
        host: &DatabaseHostConnection,
    ) -> Result<MySqlPool, ProvisionerDomainError> {
        let options = MySqlConnectOptions::new()
            .host(host.address())
            .port(host.port())
            .username(host.username())
            .password(host.password());
        let connect_timeout = self.connect_timeout;

        self.pools
            .get_or_connect(host, || async move {
                MySqlPoolOptions::new()
                    .max_connections(2)
                    .acquire_timeout(connect_timeout)
                    .connect_with(options)
                    .await
                    .map_err(map_remote_error)
            })
            .await
    }

    // Administrative statements are sent unprepared; not every one of them is
    // accepted by the prepared statement protocol.
    async fn run_statement(
        &self,
        host: &DatabaseHostConnection,
        operation: &'static str,
        statement: &str,
    ) -> Result<(), ProvisionerDomainError> {
        debug!(host = %host.target(), operation, "running administrative statement");

        let pool = self.pool_for(host).await?;
        pool.execute(statement).await.map_err(map_remote_error)?;

        Ok(())
    }
}

#[async_trait]
impl DatabaseAdministrationRepository for SqlxMySqlDatabaseAdministrationRepositoryImpl {
    async fn ping(&self, host: &DatabaseHostConnection) -> Result<(), ProvisionerDomainError> {
        self.run_statement(host, "ping", "SELECT 1").await
    }

    async fn create_database(
        &self,
        host: &DatabaseHostConnection,
        database_name: &ProvisionedDatabaseName,
    ) -> Result<(), ProvisionerDomainError> {
        // No IF NOT EXISTS: an existing database on this host must fail the step.
        self.run_statement(
            host,
            "create_database",
            &format!(
                "CREATE DATABASE {}",
                quote_identifier(database_name.value())
            ),
        )
        .await
    }

    async fn create_user(
        &self,
        host: &DatabaseHostConnection,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
        password: &DatabasePassword,
        max_connections: Option<u32>,
    ) -> Result<(), ProvisionerDomainError> {
        let mut statement = format!(
            "CREATE USER {} IDENTIFIED BY {}",
            account(username, remote),
            quote_literal(password.value())
        );
        if let Some(limit) = max_connections {
            statement.push_str(&format!(" WITH MAX_USER_CONNECTIONS {limit}"));
        }

        self.run_statement(host, "create_user", &statement).await
    }

    async fn assign_user_to_database(
        &self,
        host: &DatabaseHostConnection,
        database_name: &ProvisionedDatabaseName,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
    ) -> Result<(), ProvisionerDomainError> {
        self.run_statement(
            host,
            "assign_user_to_database",
            &format!(
                "GRANT {GRANTED_PRIVILEGES} ON {}.* TO {}",
                quote_identifier(database_name.value()),
                account(username, remote)
            ),
        )
        .await
    }

    async fn update_user_password(
        &self,
        host: &DatabaseHostConnection,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
        password: &DatabasePassword,
    ) -> Result<(), ProvisionerDomainError> {
        self.run_statement(
            host,
            "update_user_password",
            &format!(
                "ALTER USER {} IDENTIFIED BY {}",
                account(username, remote),
                quote_literal(password.value())
            ),
        )
        .await
    }

    async fn drop_user(
        &self,
        host: &DatabaseHostConnection,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
    ) -> Result<(), ProvisionerDomainError> {
        self.run_statement(
            host,
            "drop_user",
            &format!("DROP USER IF EXISTS {}", account(username, remote)),
        )
        .await
    }

    async fn drop_database(
        &self,
        host: &DatabaseHostConnection,
        database_name: &ProvisionedDatabaseName,
    ) -> Result<(), ProvisionerDomainError> {
        self.run_statement(
            host,
            "drop_database",
            &format!(
                "DROP DATABASE IF EXISTS {}",
                quote_identifier(database_name.value())
            ),
        )
        .await
    }

    async fn flush(&self, host: &DatabaseHostConnection) -> Result<(), ProvisionerDomainError> {
        self.run_statement(host, "flush", "FLUSH PRIVILEGES").await
    }

    async fn release(&self, host: &DatabaseHostConnection) {
        if let Some(pool) = self.pools.evict(host).await {
            pool.close().await;
            info!(host = %host.target(), "closed connection pool for database host");
        }
    }
}

fn account(username: &DatabaseUsername, remote: &RemoteAccessPattern) -> String {
    format!(
        "{}@{}",
        quote_literal(username.value()),
        quote_literal(remote.value())
    )
}

fn quote_identifier(value: &str) -> String {
    format!("`{}`", value.replace('`', "``"))
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
}

fn map_remote_error(error: sqlx::Error) -> ProvisionerDomainError {
    ProvisionerDomainError::RemoteProvisioningError(error.to_string())
}
