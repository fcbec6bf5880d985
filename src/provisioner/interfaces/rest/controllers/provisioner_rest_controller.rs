use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use tracing::{error, warn};
use validator::Validate;

use crate::{
    config::provisioning_settings::ProvisioningSettings,
    provisioner::{
        domain::{
            model::{
                commands::{
                    create_provisioned_database_command::CreateProvisionedDatabaseCommand,
                    delete_provisioned_database_command::DeleteProvisionedDatabaseCommand,
                    deploy_provisioned_database_command::DeployProvisionedDatabaseCommand,
                    rotate_provisioned_database_password_command::RotateProvisionedDatabasePasswordCommand,
                },
                entities::{
                    issued_database_credentials::IssuedDatabaseCredentials,
                    provisioned_database::ProvisionedDatabase, server::Server,
                },
                enums::provisioner_domain_error::ProvisionerDomainError,
                queries::{
                    get_provisioned_database_query::GetProvisionedDatabaseQuery,
                    list_provisioned_databases_query::ListProvisionedDatabasesQuery,
                },
                value_objects::{
                    database_host_id::DatabaseHostId, provisioned_database_id::ProvisionedDatabaseId,
                    server_id::ServerId,
                },
            },
            services::{
                database_provisioning_command_service::DatabaseProvisioningCommandService,
                database_provisioning_query_service::DatabaseProvisioningQueryService,
            },
        },
        infrastructure::persistence::repositories::server_repository::ServerRepository,
        interfaces::rest::resources::{
            create_provisioned_database_request_resource::CreateProvisionedDatabaseRequestResource,
            deploy_provisioned_database_request_resource::DeployProvisionedDatabaseRequestResource,
            error_response_resource::ErrorResponseResource,
            provisioned_database_resource::{
                IssuedDatabaseCredentialsResource, ProvisionedDatabaseResource,
            },
        },
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct ProvisionerRestControllerState {
    pub command_service: Arc<dyn DatabaseProvisioningCommandService>,
    pub query_service: Arc<dyn DatabaseProvisioningQueryService>,
    pub server_repository: Arc<dyn ServerRepository>,
    pub settings: ProvisioningSettings,
}

pub fn router(state: ProvisionerRestControllerState) -> Router {
    Router::new()
        .route(
            "/servers/:server_id/databases",
            post(create_provisioned_database).get(list_provisioned_databases),
        )
        .route(
            "/servers/:server_id/databases/deploy",
            post(deploy_provisioned_database),
        )
        .route(
            "/servers/:server_id/databases/:database_id",
            get(get_provisioned_database).delete(delete_provisioned_database),
        )
        .route(
            "/servers/:server_id/databases/:database_id/rotate-password",
            post(rotate_provisioned_database_password),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/servers/{server_id}/databases",
    tag = "provisioner",
    params(("server_id" = i64, Path, description = "Owning server")),
    request_body = CreateProvisionedDatabaseRequestResource,
    responses(
        (status = 201, description = "Database provisioned", body = IssuedDatabaseCredentialsResource),
        (status = 400, description = "Invalid payload or database name", body = ErrorResponseResource),
        (status = 403, description = "Client databases are disabled", body = ErrorResponseResource),
        (status = 404, description = "Server or database host not found", body = ErrorResponseResource),
        (status = 409, description = "Duplicate name or database limit reached", body = ErrorResponseResource),
        (status = 502, description = "Database host rejected the operation", body = ErrorResponseResource)
    )
)]
pub async fn create_provisioned_database(
    State(state): State<ProvisionerRestControllerState>,
    Path(server_id): Path<i64>,
    Json(request): Json<CreateProvisionedDatabaseRequestResource>,
) -> Result<(StatusCode, Json<IssuedDatabaseCredentialsResource>), ErrorResponse> {
    ensure_databases_enabled(&state)?;
    if let Err(validation_error) = request.validate() {
        return Err(validation_failed(validation_error));
    }

    let server = load_server(&state, server_id).await?;
    let command = CreateProvisionedDatabaseCommand::new(
        request.database,
        request.remote,
        DatabaseHostId::new(request.database_host_id).map_err(map_domain_error)?,
        request.max_connections,
    );

    let issued = state
        .command_service
        .handle_create(&server, command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_issued_resource(issued))))
}

#[utoipa::path(
    post,
    path = "/servers/{server_id}/databases/deploy",
    tag = "provisioner",
    params(("server_id" = i64, Path, description = "Owning server")),
    request_body = DeployProvisionedDatabaseRequestResource,
    responses(
        (status = 201, description = "Database provisioned on a selected host", body = IssuedDatabaseCredentialsResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 403, description = "Client databases are disabled", body = ErrorResponseResource),
        (status = 409, description = "Duplicate name or database limit reached", body = ErrorResponseResource),
        (status = 422, description = "No database host available", body = ErrorResponseResource),
        (status = 502, description = "Database host rejected the operation", body = ErrorResponseResource)
    )
)]
pub async fn deploy_provisioned_database(
    State(state): State<ProvisionerRestControllerState>,
    Path(server_id): Path<i64>,
    Json(request): Json<DeployProvisionedDatabaseRequestResource>,
) -> Result<(StatusCode, Json<IssuedDatabaseCredentialsResource>), ErrorResponse> {
    ensure_databases_enabled(&state)?;

    let server = load_server(&state, server_id).await?;
    let issued = state
        .command_service
        .handle_deploy(
            &server,
            DeployProvisionedDatabaseCommand::new(request.database, request.remote),
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_issued_resource(issued))))
}

#[utoipa::path(
    get,
    path = "/servers/{server_id}/databases",
    tag = "provisioner",
    params(("server_id" = i64, Path, description = "Owning server")),
    responses(
        (status = 200, description = "Databases owned by the server", body = [ProvisionedDatabaseResource]),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_provisioned_databases(
    State(state): State<ProvisionerRestControllerState>,
    Path(server_id): Path<i64>,
) -> Result<Json<Vec<ProvisionedDatabaseResource>>, ErrorResponse> {
    let server_id = ServerId::new(server_id).map_err(map_domain_error)?;
    let databases = state
        .query_service
        .handle_list(ListProvisionedDatabasesQuery::new(server_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(databases.iter().map(to_resource).collect()))
}

#[utoipa::path(
    get,
    path = "/servers/{server_id}/databases/{database_id}",
    tag = "provisioner",
    params(
        ("server_id" = i64, Path, description = "Owning server"),
        ("database_id" = i64, Path, description = "Database record id")
    ),
    responses(
        (status = 200, description = "Database metadata", body = ProvisionedDatabaseResource),
        (status = 404, description = "Database not found", body = ErrorResponseResource)
    )
)]
pub async fn get_provisioned_database(
    State(state): State<ProvisionerRestControllerState>,
    Path((server_id, database_id)): Path<(i64, i64)>,
) -> Result<Json<ProvisionedDatabaseResource>, ErrorResponse> {
    let query = GetProvisionedDatabaseQuery::new(
        ServerId::new(server_id).map_err(map_domain_error)?,
        ProvisionedDatabaseId::new(database_id).map_err(map_domain_error)?,
    );
    let database = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&database)))
}

#[utoipa::path(
    post,
    path = "/servers/{server_id}/databases/{database_id}/rotate-password",
    tag = "provisioner",
    params(
        ("server_id" = i64, Path, description = "Owning server"),
        ("database_id" = i64, Path, description = "Database record id")
    ),
    responses(
        (status = 200, description = "Password rotated", body = IssuedDatabaseCredentialsResource),
        (status = 404, description = "Database not found", body = ErrorResponseResource),
        (status = 502, description = "Database host rejected the operation", body = ErrorResponseResource)
    )
)]
pub async fn rotate_provisioned_database_password(
    State(state): State<ProvisionerRestControllerState>,
    Path((server_id, database_id)): Path<(i64, i64)>,
) -> Result<Json<IssuedDatabaseCredentialsResource>, ErrorResponse> {
    let command = RotateProvisionedDatabasePasswordCommand::new(
        ServerId::new(server_id).map_err(map_domain_error)?,
        ProvisionedDatabaseId::new(database_id).map_err(map_domain_error)?,
    );
    let issued = state
        .command_service
        .handle_rotate_password(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_issued_resource(issued)))
}

#[utoipa::path(
    delete,
    path = "/servers/{server_id}/databases/{database_id}",
    tag = "provisioner",
    params(
        ("server_id" = i64, Path, description = "Owning server"),
        ("database_id" = i64, Path, description = "Database record id")
    ),
    responses(
        (status = 204, description = "Database deleted or already absent"),
        (status = 404, description = "Database belongs to another server", body = ErrorResponseResource),
        (status = 502, description = "Database host rejected the operation", body = ErrorResponseResource)
    )
)]
pub async fn delete_provisioned_database(
    State(state): State<ProvisionerRestControllerState>,
    Path((server_id, database_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ErrorResponse> {
    let command =
        DeleteProvisionedDatabaseCommand::new(ProvisionedDatabaseId::new(database_id).map_err(map_domain_error)?)
            .scoped_to_server(ServerId::new(server_id).map_err(map_domain_error)?);

    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// Runs before payload checks so a disabled feature wins over any other error.
fn ensure_databases_enabled(state: &ProvisionerRestControllerState) -> Result<(), ErrorResponse> {
    if state.settings.databases_enabled {
        Ok(())
    } else {
        Err(map_domain_error(ProvisionerDomainError::FeatureDisabled))
    }
}

async fn load_server(
    state: &ProvisionerRestControllerState,
    server_id: i64,
) -> Result<Server, ErrorResponse> {
    let server_id = ServerId::new(server_id).map_err(map_domain_error)?;

    state
        .server_repository
        .find_by_id(&server_id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| map_domain_error(ProvisionerDomainError::ServerNotFound))
}

fn to_resource(database: &ProvisionedDatabase) -> ProvisionedDatabaseResource {
    ProvisionedDatabaseResource {
        id: database.id().value(),
        server_id: database.server_id().value(),
        database_host_id: database.database_host_id().value(),
        database: database.database_name().value().to_string(),
        username: database.username().value().to_string(),
        remote: database.remote().value().to_string(),
        max_connections: database.max_connections(),
        created_at: database.created_at().to_rfc3339(),
    }
}

fn to_issued_resource(issued: IssuedDatabaseCredentials) -> IssuedDatabaseCredentialsResource {
    IssuedDatabaseCredentialsResource {
        database: to_resource(&issued.database),
        password: issued.password.value().to_string(),
    }
}

pub(crate) fn validation_failed(error: validator::ValidationErrors) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseResource {
            code: "validation_failed".to_string(),
            message: error.to_string(),
        }),
    )
}

pub(crate) fn map_domain_error(error: ProvisionerDomainError) -> ErrorResponse {
    let (status, code) = match error {
        ProvisionerDomainError::FeatureDisabled => (StatusCode::FORBIDDEN, "feature_disabled"),
        ProvisionerDomainError::DatabaseLimitReached(_) => {
            (StatusCode::CONFLICT, "database_limit_reached")
        }
        ProvisionerDomainError::InvalidDatabaseName { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_database_name")
        }
        ProvisionerDomainError::InvalidDatabaseUsername
        | ProvisionerDomainError::InvalidRemotePattern
        | ProvisionerDomainError::InvalidConnectionLimit(_)
        | ProvisionerDomainError::InvalidDatabaseHost(_)
        | ProvisionerDomainError::InvalidIdentifier(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        ProvisionerDomainError::DuplicateDatabaseName => {
            (StatusCode::CONFLICT, "duplicate_database_name")
        }
        ProvisionerDomainError::DatabaseHostHasDatabases => {
            (StatusCode::CONFLICT, "database_host_has_databases")
        }
        ProvisionerDomainError::DatabaseNotFound => (StatusCode::NOT_FOUND, "database_not_found"),
        ProvisionerDomainError::DatabaseHostNotFound => {
            (StatusCode::NOT_FOUND, "database_host_not_found")
        }
        ProvisionerDomainError::ServerNotFound => (StatusCode::NOT_FOUND, "server_not_found"),
        ProvisionerDomainError::NoSuitableDatabaseHost => {
            (StatusCode::UNPROCESSABLE_ENTITY, "no_suitable_database_host")
        }
        ProvisionerDomainError::RemoteProvisioningError(_) => {
            (StatusCode::BAD_GATEWAY, "remote_provisioning_failed")
        }
        ProvisionerDomainError::InfrastructureError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
        }
    };

    // Engine and driver messages name hosts and internals; they stay in the logs.
    let message = match &error {
        ProvisionerDomainError::RemoteProvisioningError(detail) => {
            warn!(%detail, "database host rejected the operation");
            "database host rejected the operation".to_string()
        }
        ProvisionerDomainError::InfrastructureError(detail) => {
            error!(%detail, "request failed on an infrastructure error");
            "internal error".to_string()
        }
        _ => error.to_string(),
    };

    (
        status,
        Json(ErrorResponseResource {
            code: code.to_string(),
            message,
        }),
    )
}
