use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use server_database_provisioner::{
    config::provisioning_settings::ProvisioningSettings,
    provisioner::interfaces::rest::{
        controllers::provisioner_rest_controller::{
            create_provisioned_database, deploy_provisioned_database,
        },
        resources::{
            create_provisioned_database_request_resource::CreateProvisionedDatabaseRequestResource,
            deploy_provisioned_database_request_resource::DeployProvisionedDatabaseRequestResource,
        },
    },
};

use crate::support::{DEFAULT_NODE_ID, create_harness, database_host, default_harness, server};

fn create_request(database: &str, remote: Option<&str>) -> CreateProvisionedDatabaseRequestResource {
    CreateProvisionedDatabaseRequestResource {
        database: Some(database.to_string()),
        remote: remote.map(str::to_string),
        database_host_id: 1,
        max_connections: None,
    }
}

fn disabled_settings() -> ProvisioningSettings {
    ProvisioningSettings {
        databases_enabled: false,
        allow_random_host: true,
    }
}

#[tokio::test]
async fn create_reports_disabled_feature_before_payload_errors() {
    let harness = create_harness(disabled_settings());
    harness.server_repository.seed(server(1, None));
    harness.host_repository.seed(database_host(1, None));

    let result = create_provisioned_database(
        State(harness.rest_state()),
        Path(1),
        Json(create_request(&format!("s1_{}", "a".repeat(60)), Some(""))),
    )
    .await;

    let (status, Json(body)) = result.expect_err("disabled feature should be rejected");
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.code, "feature_disabled");
    assert!(harness.administration_repository.calls().is_empty());
}

#[tokio::test]
async fn create_reports_disabled_feature_for_an_unknown_server() {
    let harness = create_harness(disabled_settings());

    let result = create_provisioned_database(
        State(harness.rest_state()),
        Path(404),
        Json(create_request("s404_example", None)),
    )
    .await;

    let (status, Json(body)) = result.expect_err("disabled feature should be rejected");
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.code, "feature_disabled");
}

#[tokio::test]
async fn deploy_reports_disabled_feature_before_payload_errors() {
    let harness = create_harness(disabled_settings());
    harness.server_repository.seed(server(1, None));

    let result = deploy_provisioned_database(
        State(harness.rest_state()),
        Path(1),
        Json(DeployProvisionedDatabaseRequestResource {
            database: String::new(),
            remote: Some(String::new()),
        }),
    )
    .await;

    let (status, Json(body)) = result.expect_err("disabled feature should be rejected");
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body.code, "feature_disabled");
}

#[tokio::test]
async fn create_treats_an_empty_remote_as_any_host() {
    let harness = default_harness();
    harness.server_repository.seed(server(1, None));
    harness.host_repository.seed(database_host(1, None));

    let (status, Json(issued)) = create_provisioned_database(
        State(harness.rest_state()),
        Path(1),
        Json(create_request("s1_example", Some(""))),
    )
    .await
    .expect("create should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(issued.database.remote, "%");
    assert_eq!(issued.database.database, "s1_example");
    assert_eq!(issued.password.len(), 24);
}

#[tokio::test]
async fn create_reports_an_overlong_name_as_invalid_database_name() {
    let harness = default_harness();
    harness.server_repository.seed(server(1, None));
    harness.host_repository.seed(database_host(1, None));

    let result = create_provisioned_database(
        State(harness.rest_state()),
        Path(1),
        Json(create_request(&format!("s1_{}", "a".repeat(60)), None)),
    )
    .await;

    let (status, Json(body)) = result.expect_err("overlong name should be rejected");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "invalid_database_name");
}

#[tokio::test]
async fn create_rejects_a_connection_limit_the_store_cannot_hold() {
    let harness = default_harness();
    harness.server_repository.seed(server(1, None));
    harness.host_repository.seed(database_host(1, None));

    let result = create_provisioned_database(
        State(harness.rest_state()),
        Path(1),
        Json(CreateProvisionedDatabaseRequestResource {
            max_connections: Some(3_000_000_000),
            ..create_request("s1_example", None)
        }),
    )
    .await;

    let (status, Json(body)) = result.expect_err("limit should be rejected");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "validation_failed");
    assert!(harness.administration_repository.calls().is_empty());
}

#[tokio::test]
async fn create_hides_remote_error_details_from_the_client() {
    let harness = default_harness();
    harness.server_repository.seed(server(1, None));
    harness
        .host_repository
        .seed(database_host(1, Some(DEFAULT_NODE_ID)));
    harness.administration_repository.fail_on("create_database");

    let result = create_provisioned_database(
        State(harness.rest_state()),
        Path(1),
        Json(create_request("s1_example", None)),
    )
    .await;

    let (status, Json(body)) = result.expect_err("remote failure should surface");
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.code, "remote_provisioning_failed");
    assert!(!body.message.contains("create_database failed"));
    assert!(!body.message.contains("10.0.0.1"));
}

#[tokio::test]
async fn create_for_an_unknown_server_is_not_found() {
    let harness = default_harness();

    let result = create_provisioned_database(
        State(harness.rest_state()),
        Path(9),
        Json(create_request("s9_example", None)),
    )
    .await;

    let (status, Json(body)) = result.expect_err("unknown server should be rejected");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.code, "server_not_found");
}
