use server_database_provisioner::provisioner::domain::{
    model::{
        commands::{
            delete_database_host_command::DeleteDatabaseHostCommand,
            register_database_host_command::RegisterDatabaseHostCommand,
        },
        enums::provisioner_domain_error::ProvisionerDomainError,
    },
    services::{
        database_host_command_service::DatabaseHostCommandService,
        database_host_query_service::DatabaseHostQueryService,
    },
};

use crate::support::{database_host, default_harness, host_id, provisioned_database};

fn register_command(address: &str) -> RegisterDatabaseHostCommand {
    RegisterDatabaseHostCommand::new(
        "primary".to_string(),
        address.to_string(),
        3306,
        "root".to_string(),
        "secret".to_string(),
        Some(1),
    )
    .expect("valid command")
}

#[tokio::test]
async fn handle_register_pings_host_before_storing_it() {
    let harness = default_harness();

    let host = harness
        .host_service
        .handle_register(register_command("db.internal"))
        .await
        .expect("register should succeed");

    assert_eq!(host.name(), "primary");
    assert_eq!(host.connection().address(), "db.internal");
    assert_eq!(host.node_id(), Some(1));
    assert_eq!(harness.administration_repository.operations(), vec!["ping"]);
    assert_eq!(harness.host_repository.hosts().len(), 1);
}

#[tokio::test]
async fn handle_register_refuses_an_unreachable_host() {
    let harness = default_harness();
    harness.administration_repository.fail_on("ping");

    let result = harness
        .host_service
        .handle_register(register_command("db.internal"))
        .await;

    assert!(matches!(
        result,
        Err(ProvisionerDomainError::RemoteProvisioningError(_))
    ));
    assert!(harness.host_repository.hosts().is_empty());
}

#[test]
fn register_command_rejects_blank_fields() {
    let blank_name = RegisterDatabaseHostCommand::new(
        "  ".to_string(),
        "db.internal".to_string(),
        3306,
        "root".to_string(),
        "secret".to_string(),
        None,
    );
    let zero_port = RegisterDatabaseHostCommand::new(
        "primary".to_string(),
        "db.internal".to_string(),
        0,
        "root".to_string(),
        "secret".to_string(),
        None,
    );

    assert!(matches!(
        blank_name,
        Err(ProvisionerDomainError::InvalidDatabaseHost(_))
    ));
    assert!(matches!(
        zero_port,
        Err(ProvisionerDomainError::InvalidDatabaseHost(_))
    ));
}

#[tokio::test]
async fn handle_delete_refuses_a_host_that_still_has_databases() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(1, None));
    harness
        .metadata_repository
        .seed(provisioned_database(1, 1, 1, "s1_example"));

    let result = harness
        .host_service
        .handle_delete(DeleteDatabaseHostCommand::new(host_id(1)))
        .await;

    assert!(matches!(
        result,
        Err(ProvisionerDomainError::DatabaseHostHasDatabases)
    ));
    assert_eq!(harness.host_repository.hosts().len(), 1);
    assert!(harness.administration_repository.calls_for("release").is_empty());
}

#[tokio::test]
async fn handle_delete_removes_an_empty_host() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(1, None));

    harness
        .host_service
        .handle_delete(DeleteDatabaseHostCommand::new(host_id(1)))
        .await
        .expect("delete should succeed");

    assert!(harness.host_repository.hosts().is_empty());
    let released = harness.administration_repository.calls_for("release");
    assert_eq!(released.len(), 1);
    assert_eq!(released[0].host, "10.0.0.1");
}

#[tokio::test]
async fn handle_delete_of_unknown_host_is_not_found() {
    let harness = default_harness();

    let result = harness
        .host_service
        .handle_delete(DeleteDatabaseHostCommand::new(host_id(5)))
        .await;

    assert!(matches!(
        result,
        Err(ProvisionerDomainError::DatabaseHostNotFound)
    ));
}

#[tokio::test]
async fn handle_list_returns_hosts_ordered_by_id() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(3, None));
    harness.host_repository.seed(database_host(1, Some(2)));

    let hosts = harness
        .host_query_service
        .handle_list()
        .await
        .expect("list should succeed");

    let ids: Vec<i64> = hosts.iter().map(|host| host.id().value()).collect();
    assert_eq!(ids, vec![1, 3]);
}
