use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};
use tracing::info;

use crate::{
    config::app_config::AppConfig,
    provisioner::{
        application::{
            command_services::{
                database_host_command_service_impl::DatabaseHostCommandServiceImpl,
                database_provisioning_command_service_impl::DatabaseProvisioningCommandServiceImpl,
            },
            query_services::{
                database_host_query_service_impl::DatabaseHostQueryServiceImpl,
                database_provisioning_query_service_impl::DatabaseProvisioningQueryServiceImpl,
            },
        },
        infrastructure::persistence::repositories::{
            mysql::sqlx_mysql_database_administration_repository_impl::SqlxMySqlDatabaseAdministrationRepositoryImpl,
            postgres::{
                sqlx_database_host_repository_impl::SqlxDatabaseHostRepositoryImpl,
                sqlx_provisioned_database_repository_impl::SqlxProvisionedDatabaseRepositoryImpl,
                sqlx_provisioning_audit_event_repository_impl::SqlxProvisioningAuditEventRepositoryImpl,
                sqlx_server_repository_impl::SqlxServerRepositoryImpl,
            },
        },
        interfaces::rest::controllers::{
            database_host_rest_controller::{self, DatabaseHostRestControllerState},
            provisioner_rest_controller::{self, ProvisionerRestControllerState},
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_provisioner_router(config: &AppConfig) -> Result<Router, String> {
    let metadata_pool = PgPool::connect(&config.admin_database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&metadata_pool)
        .await
        .map_err(|e| e.to_string())?;

    let metadata_repository = Arc::new(SqlxProvisionedDatabaseRepositoryImpl::new(
        metadata_pool.clone(),
    ));
    let host_repository = Arc::new(SqlxDatabaseHostRepositoryImpl::new(metadata_pool.clone()));
    let server_repository = Arc::new(SqlxServerRepositoryImpl::new(metadata_pool.clone()));
    let audit_event_repository = Arc::new(SqlxProvisioningAuditEventRepositoryImpl::new(
        metadata_pool,
    ));
    let administration_repository = Arc::new(SqlxMySqlDatabaseAdministrationRepositoryImpl::new(
        config.database_host_connect_timeout(),
    ));

    let settings = config.provisioning_settings();
    info!(
        databases_enabled = settings.databases_enabled,
        allow_random_host = settings.allow_random_host,
        "provisioner settings loaded"
    );

    let provisioning_command_service = Arc::new(DatabaseProvisioningCommandServiceImpl::new(
        metadata_repository.clone(),
        host_repository.clone(),
        administration_repository.clone(),
        audit_event_repository,
        settings,
    ));
    let provisioning_query_service = Arc::new(DatabaseProvisioningQueryServiceImpl::new(
        metadata_repository.clone(),
    ));
    let host_command_service = Arc::new(DatabaseHostCommandServiceImpl::new(
        host_repository.clone(),
        metadata_repository,
        administration_repository,
    ));
    let host_query_service = Arc::new(DatabaseHostQueryServiceImpl::new(host_repository));

    Ok(Router::new()
        .merge(provisioner_rest_controller::router(
            ProvisionerRestControllerState {
                command_service: provisioning_command_service,
                query_service: provisioning_query_service,
                server_repository,
                settings,
            },
        ))
        .merge(database_host_rest_controller::router(
            DatabaseHostRestControllerState {
                command_service: host_command_service,
                query_service: host_query_service,
            },
        )))
}
