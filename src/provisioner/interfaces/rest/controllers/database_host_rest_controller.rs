use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use validator::Validate;

use crate::provisioner::{
    domain::{
        model::{
            commands::{
                delete_database_host_command::DeleteDatabaseHostCommand,
                register_database_host_command::RegisterDatabaseHostCommand,
            },
            entities::database_host::DatabaseHost,
            value_objects::database_host_id::DatabaseHostId,
        },
        services::{
            database_host_command_service::DatabaseHostCommandService,
            database_host_query_service::DatabaseHostQueryService,
        },
    },
    interfaces::rest::{
        controllers::provisioner_rest_controller::{map_domain_error, validation_failed},
        resources::{
            database_host_resource::DatabaseHostResource,
            error_response_resource::ErrorResponseResource,
            register_database_host_request_resource::RegisterDatabaseHostRequestResource,
        },
    },
};

#[derive(Clone)]
pub struct DatabaseHostRestControllerState {
    pub command_service: Arc<dyn DatabaseHostCommandService>,
    pub query_service: Arc<dyn DatabaseHostQueryService>,
}

pub fn router(state: DatabaseHostRestControllerState) -> Router {
    Router::new()
        .route(
            "/database-hosts",
            post(register_database_host).get(list_database_hosts),
        )
        .route(
            "/database-hosts/:database_host_id",
            delete(delete_database_host),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/database-hosts",
    tag = "database-hosts",
    request_body = RegisterDatabaseHostRequestResource,
    responses(
        (status = 201, description = "Database host registered", body = DatabaseHostResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 502, description = "Host could not be reached with the given login", body = ErrorResponseResource)
    )
)]
pub async fn register_database_host(
    State(state): State<DatabaseHostRestControllerState>,
    Json(request): Json<RegisterDatabaseHostRequestResource>,
) -> Result<(StatusCode, Json<DatabaseHostResource>), (StatusCode, Json<ErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err(validation_failed(validation_error));
    }

    let command = RegisterDatabaseHostCommand::new(
        request.name,
        request.host,
        request.port,
        request.username,
        request.password,
        request.node_id,
    )
    .map_err(map_domain_error)?;

    let host = state
        .command_service
        .handle_register(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&host))))
}

#[utoipa::path(
    get,
    path = "/database-hosts",
    tag = "database-hosts",
    responses(
        (status = 200, description = "Registered database hosts", body = [DatabaseHostResource])
    )
)]
pub async fn list_database_hosts(
    State(state): State<DatabaseHostRestControllerState>,
) -> Result<Json<Vec<DatabaseHostResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    let hosts = state
        .query_service
        .handle_list()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(hosts.iter().map(to_resource).collect()))
}

#[utoipa::path(
    delete,
    path = "/database-hosts/{database_host_id}",
    tag = "database-hosts",
    params(("database_host_id" = i64, Path, description = "Database host id")),
    responses(
        (status = 204, description = "Database host removed"),
        (status = 404, description = "Database host not found", body = ErrorResponseResource),
        (status = 409, description = "Host still carries databases", body = ErrorResponseResource)
    )
)]
pub async fn delete_database_host(
    State(state): State<DatabaseHostRestControllerState>,
    Path(database_host_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponseResource>)> {
    let database_host_id = DatabaseHostId::new(database_host_id).map_err(map_domain_error)?;

    state
        .command_service
        .handle_delete(DeleteDatabaseHostCommand::new(database_host_id))
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn to_resource(host: &DatabaseHost) -> DatabaseHostResource {
    let connection = host.connection();

    DatabaseHostResource {
        id: host.id().value(),
        name: host.name().to_string(),
        host: connection.address().to_string(),
        port: connection.port(),
        username: connection.username().to_string(),
        node_id: host.node_id(),
        created_at: host.created_at().to_rfc3339(),
    }
}
