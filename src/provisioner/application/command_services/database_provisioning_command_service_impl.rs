use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use tracing::{error, info, warn};

use crate::{
    config::provisioning_settings::ProvisioningSettings,
    provisioner::{
        application::best_effort::best_effort,
        domain::{
            model::{
                commands::{
                    create_provisioned_database_command::{
                        CreateProvisionedDatabaseCommand, MAX_CONNECTION_LIMIT,
                    },
                    delete_provisioned_database_command::DeleteProvisionedDatabaseCommand,
                    deploy_provisioned_database_command::DeployProvisionedDatabaseCommand,
                    rotate_provisioned_database_password_command::RotateProvisionedDatabasePasswordCommand,
                },
                entities::{
                    database_host::DatabaseHost,
                    issued_database_credentials::IssuedDatabaseCredentials,
                    provisioned_database::ProvisionedDatabase, server::Server,
                },
                enums::{
                    provisioner_domain_error::ProvisionerDomainError,
                    provisioning_audit_event_name::ProvisioningAuditEventName,
                },
                events::{
                    provisioned_database_created_event::ProvisionedDatabaseCreatedEvent,
                    provisioned_database_deleted_event::ProvisionedDatabaseDeletedEvent,
                },
                value_objects::{
                    database_host_connection::DatabaseHostConnection,
                    database_password::DatabasePassword, database_username::DatabaseUsername,
                    provisioned_database_name::ProvisionedDatabaseName,
                    remote_access_pattern::RemoteAccessPattern, server_id::ServerId,
                },
            },
            services::database_provisioning_command_service::DatabaseProvisioningCommandService,
        },
        infrastructure::persistence::repositories::{
            database_administration_repository::DatabaseAdministrationRepository,
            database_host_repository::DatabaseHostRepository,
            provisioned_database_repository::{
                NewProvisionedDatabase, ProvisionedDatabaseRepository,
            },
            provisioning_audit_event_repository::{
                ProvisioningAuditEventRecord, ProvisioningAuditEventRepository,
            },
        },
    },
};

/// Validated input for the remote half of a create.
struct ProvisioningRequest {
    server_id: ServerId,
    host: DatabaseHost,
    database_name: ProvisionedDatabaseName,
    remote: RemoteAccessPattern,
    max_connections: Option<u32>,
}

#[derive(Clone)]
pub struct DatabaseProvisioningCommandServiceImpl {
    metadata_repository: Arc<dyn ProvisionedDatabaseRepository>,
    host_repository: Arc<dyn DatabaseHostRepository>,
    administration_repository: Arc<dyn DatabaseAdministrationRepository>,
    audit_event_repository: Arc<dyn ProvisioningAuditEventRepository>,
    settings: ProvisioningSettings,
}

impl DatabaseProvisioningCommandServiceImpl {
    pub fn new(
        metadata_repository: Arc<dyn ProvisionedDatabaseRepository>,
        host_repository: Arc<dyn DatabaseHostRepository>,
        administration_repository: Arc<dyn DatabaseAdministrationRepository>,
        audit_event_repository: Arc<dyn ProvisioningAuditEventRepository>,
        settings: ProvisioningSettings,
    ) -> Self {
        Self {
            metadata_repository,
            host_repository,
            administration_repository,
            audit_event_repository,
            settings,
        }
    }

    async fn provision(
        &self,
        request: ProvisioningRequest,
    ) -> Result<IssuedDatabaseCredentials, ProvisionerDomainError> {
        let username = DatabaseUsername::generate(&request.server_id);
        let password = DatabasePassword::generate();
        let connection = request.host.connection();

        self.record_audit(
            ProvisioningAuditEventName::ProvisionStarted,
            Some(&request.server_id),
            &request.database_name,
            Some(&username),
            None,
        )
        .await;

        if let Err(error) = self
            .create_remote_stack(connection, &request, &username, &password)
            .await
        {
            warn!(
                server_id = request.server_id.value(),
                database = request.database_name.value(),
                database_host_id = request.host.id().value(),
                %error,
                "remote provisioning failed; removing partial remote state"
            );
            self.compensate_remote_stack(
                connection,
                &request.database_name,
                &username,
                &request.remote,
            )
            .await;
            self.record_audit(
                ProvisioningAuditEventName::ProvisionFailed,
                Some(&request.server_id),
                &request.database_name,
                Some(&username),
                Some(&error),
            )
            .await;

            return Err(error);
        }

        let inserted = self
            .metadata_repository
            .insert(&NewProvisionedDatabase {
                server_id: request.server_id,
                database_host_id: *request.host.id(),
                database_name: request.database_name.clone(),
                username: username.clone(),
                remote: request.remote.clone(),
                max_connections: request.max_connections,
            })
            .await;

        let database = match inserted {
            Ok(database) => database,
            Err(error) => {
                // Remote objects are committed at this point and stay in place.
                error!(
                    server_id = request.server_id.value(),
                    database = request.database_name.value(),
                    database_host_id = request.host.id().value(),
                    username = username.value(),
                    %error,
                    "remote database committed but its metadata record could not be written"
                );
                self.record_audit(
                    ProvisioningAuditEventName::ProvisionFailed,
                    Some(&request.server_id),
                    &request.database_name,
                    Some(&username),
                    Some(&error),
                )
                .await;

                return Err(error);
            }
        };

        let event = ProvisionedDatabaseCreatedEvent::new(
            *database.server_id(),
            *database.database_host_id(),
            database.database_name().clone(),
            database.username().clone(),
            Utc::now(),
        );
        info!(
            server_id = event.server_id.value(),
            database = event.database_name.value(),
            database_host_id = event.database_host_id.value(),
            "database provisioned"
        );
        self.record_audit(
            ProvisioningAuditEventName::ProvisionSucceeded,
            Some(&event.server_id),
            &event.database_name,
            Some(&event.username),
            None,
        )
        .await;

        Ok(IssuedDatabaseCredentials { database, password })
    }

    async fn create_remote_stack(
        &self,
        connection: &DatabaseHostConnection,
        request: &ProvisioningRequest,
        username: &DatabaseUsername,
        password: &DatabasePassword,
    ) -> Result<(), ProvisionerDomainError> {
        let administration = &self.administration_repository;

        administration
            .create_database(connection, &request.database_name)
            .await?;
        administration
            .create_user(
                connection,
                username,
                &request.remote,
                password,
                request.max_connections,
            )
            .await?;
        administration
            .assign_user_to_database(connection, &request.database_name, username, &request.remote)
            .await?;
        administration.flush(connection).await
    }

    async fn compensate_remote_stack(
        &self,
        connection: &DatabaseHostConnection,
        database_name: &ProvisionedDatabaseName,
        username: &DatabaseUsername,
        remote: &RemoteAccessPattern,
    ) {
        let administration = &self.administration_repository;

        best_effort(
            "compensate:drop_database",
            administration.drop_database(connection, database_name),
        )
        .await;
        best_effort(
            "compensate:drop_user",
            administration.drop_user(connection, username, remote),
        )
        .await;
        best_effort("compensate:flush", administration.flush(connection)).await;
    }

    async fn deprovision(
        &self,
        database: ProvisionedDatabase,
        host: DatabaseHost,
    ) -> Result<(), ProvisionerDomainError> {
        let connection = host.connection();

        self.record_audit(
            ProvisioningAuditEventName::DeleteStarted,
            Some(database.server_id()),
            database.database_name(),
            Some(database.username()),
            None,
        )
        .await;

        if let Err(error) = self.drop_remote_stack(connection, &database).await {
            warn!(
                database_id = database.id().value(),
                database = database.database_name().value(),
                %error,
                "remote drop failed; keeping metadata record"
            );
            self.record_audit(
                ProvisioningAuditEventName::DeleteFailed,
                Some(database.server_id()),
                database.database_name(),
                Some(database.username()),
                Some(&error),
            )
            .await;

            return Err(error);
        }

        self.metadata_repository.delete(database.id()).await?;

        let event = ProvisionedDatabaseDeletedEvent::new(
            *database.server_id(),
            database.database_name().clone(),
            Utc::now(),
        );
        info!(
            server_id = event.server_id.value(),
            database = event.database_name.value(),
            "database deleted"
        );
        self.record_audit(
            ProvisioningAuditEventName::DeleteSucceeded,
            Some(&event.server_id),
            &event.database_name,
            Some(database.username()),
            None,
        )
        .await;

        Ok(())
    }

    async fn select_host_for(&self, server: &Server) -> Result<DatabaseHost, ProvisionerDomainError> {
        let hosts = self.host_repository.list_all().await?;

        if let Some(host) = hosts
            .iter()
            .find(|host| host.is_linked_to_node(server.node_id()))
        {
            return Ok(host.clone());
        }

        if self.settings.allow_random_host {
            let picked = {
                let mut rng = rand::thread_rng();
                hosts.choose(&mut rng).cloned()
            };
            if let Some(host) = picked {
                return Ok(host);
            }
        }

        Err(ProvisionerDomainError::NoSuitableDatabaseHost)
    }

    async fn drop_remote_stack(
        &self,
        connection: &DatabaseHostConnection,
        database: &ProvisionedDatabase,
    ) -> Result<(), ProvisionerDomainError> {
        let administration = &self.administration_repository;

        administration
            .drop_user(connection, database.username(), database.remote())
            .await?;
        administration
            .drop_database(connection, database.database_name())
            .await?;
        administration.flush(connection).await
    }

    async fn rotate_remote_password(
        &self,
        connection: &DatabaseHostConnection,
        database: &ProvisionedDatabase,
        password: &DatabasePassword,
    ) -> Result<(), ProvisionerDomainError> {
        let administration = &self.administration_repository;

        administration
            .update_user_password(connection, database.username(), database.remote(), password)
            .await?;
        administration.flush(connection).await
    }

    async fn find_host_of(
        &self,
        database: &ProvisionedDatabase,
    ) -> Result<DatabaseHost, ProvisionerDomainError> {
        self.host_repository
            .find_by_id(database.database_host_id())
            .await?
            .ok_or(ProvisionerDomainError::DatabaseHostNotFound)
    }

    async fn record_audit(
        &self,
        event_name: ProvisioningAuditEventName,
        server_id: Option<&ServerId>,
        database_name: &ProvisionedDatabaseName,
        username: Option<&DatabaseUsername>,
        error: Option<&ProvisionerDomainError>,
    ) {
        let mut record =
            ProvisioningAuditEventRecord::new(event_name, database_name.clone(), Utc::now());
        if let Some(server_id) = server_id {
            record = record.for_server(*server_id);
        }
        if let Some(username) = username {
            record = record.with_username(username.clone());
        }
        if let Some(error) = error {
            record = record.with_error(error);
        }

        best_effort(
            event_name.as_str(),
            self.audit_event_repository.save_event(&record),
        )
        .await;
    }
}

#[async_trait]
impl DatabaseProvisioningCommandService for DatabaseProvisioningCommandServiceImpl {
    async fn handle_create(
        &self,
        server: &Server,
        command: CreateProvisionedDatabaseCommand,
    ) -> Result<IssuedDatabaseCredentials, ProvisionerDomainError> {
        if !self.settings.databases_enabled {
            return Err(ProvisionerDomainError::FeatureDisabled);
        }

        if command.enforce_database_limit() {
            if let Some(limit) = server.database_limit() {
                let owned = self.metadata_repository.count_by_server(server.id()).await?;
                if server.has_reached_database_limit(owned) {
                    return Err(ProvisionerDomainError::DatabaseLimitReached(limit));
                }
            }
        }

        let database_name = ProvisionedDatabaseName::for_server(command.database(), server.id())?;
        let remote = RemoteAccessPattern::new(command.remote().map(str::to_string))?;
        if let Some(limit) = command
            .max_connections()
            .filter(|limit| *limit == 0 || *limit > MAX_CONNECTION_LIMIT)
        {
            return Err(ProvisionerDomainError::InvalidConnectionLimit(limit));
        }

        // Fast path only; the unique index on the name column is what actually
        // guarantees uniqueness across hosts.
        if self
            .metadata_repository
            .find_by_name(&database_name)
            .await?
            .is_some()
        {
            return Err(ProvisionerDomainError::DuplicateDatabaseName);
        }

        let host = self
            .host_repository
            .find_by_id(command.database_host_id())
            .await?
            .ok_or(ProvisionerDomainError::DatabaseHostNotFound)?;

        let request = ProvisioningRequest {
            server_id: *server.id(),
            host,
            database_name,
            remote,
            max_connections: command.max_connections(),
        };

        // Runs detached so a dropped caller cannot interrupt compensation.
        let service = self.clone();
        tokio::spawn(async move { service.provision(request).await })
            .await
            .map_err(|e| {
                ProvisionerDomainError::InfrastructureError(format!(
                    "provisioning task failed: {e}"
                ))
            })?
    }

    async fn handle_deploy(
        &self,
        server: &Server,
        command: DeployProvisionedDatabaseCommand,
    ) -> Result<IssuedDatabaseCredentials, ProvisionerDomainError> {
        if !self.settings.databases_enabled {
            return Err(ProvisionerDomainError::FeatureDisabled);
        }

        let database_name = ProvisionedDatabaseName::generate_unique(command.label(), server.id())?;
        let host = self.select_host_for(server).await?;

        self.handle_create(
            server,
            CreateProvisionedDatabaseCommand::new(
                Some(database_name.value().to_string()),
                command.remote().map(str::to_string),
                *host.id(),
                None,
            ),
        )
        .await
    }

    async fn handle_delete(
        &self,
        command: DeleteProvisionedDatabaseCommand,
    ) -> Result<(), ProvisionerDomainError> {
        let Some(database) = self
            .metadata_repository
            .find_by_id(command.database_id())
            .await?
        else {
            info!(
                database_id = command.database_id().value(),
                "database already absent; nothing to delete"
            );
            return Ok(());
        };

        if let Some(server_id) = command.server_id() {
            if !database.is_owned_by(server_id) {
                return Err(ProvisionerDomainError::DatabaseNotFound);
            }
        }

        let host = self.find_host_of(&database).await?;

        let service = self.clone();
        tokio::spawn(async move { service.deprovision(database, host).await })
            .await
            .map_err(|e| {
                ProvisionerDomainError::InfrastructureError(format!(
                    "deprovisioning task failed: {e}"
                ))
            })?
    }

    async fn handle_rotate_password(
        &self,
        command: RotateProvisionedDatabasePasswordCommand,
    ) -> Result<IssuedDatabaseCredentials, ProvisionerDomainError> {
        let database = self
            .metadata_repository
            .find_by_id(command.database_id())
            .await?
            .filter(|database| database.is_owned_by(command.server_id()))
            .ok_or(ProvisionerDomainError::DatabaseNotFound)?;
        let host = self.find_host_of(&database).await?;
        let password = DatabasePassword::generate();

        if let Err(error) = self
            .rotate_remote_password(host.connection(), &database, &password)
            .await
        {
            self.record_audit(
                ProvisioningAuditEventName::PasswordRotationFailed,
                Some(database.server_id()),
                database.database_name(),
                Some(database.username()),
                Some(&error),
            )
            .await;

            return Err(error);
        }

        self.record_audit(
            ProvisioningAuditEventName::PasswordRotationSucceeded,
            Some(database.server_id()),
            database.database_name(),
            Some(database.username()),
            None,
        )
        .await;

        Ok(IssuedDatabaseCredentials { database, password })
    }
}
