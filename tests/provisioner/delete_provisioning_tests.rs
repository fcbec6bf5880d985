use server_database_provisioner::provisioner::domain::{
    model::{
        commands::delete_provisioned_database_command::DeleteProvisionedDatabaseCommand,
        enums::provisioner_domain_error::ProvisionerDomainError,
    },
    services::database_provisioning_command_service::DatabaseProvisioningCommandService,
};

use crate::support::{database_host, database_id, default_harness, provisioned_database, server_id};

#[tokio::test]
async fn handle_delete_drops_user_then_database_and_removes_record() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(1, None));
    harness
        .metadata_repository
        .seed(provisioned_database(7, 1, 1, "s1_example"));

    harness
        .service
        .handle_delete(DeleteProvisionedDatabaseCommand::new(database_id(7)))
        .await
        .expect("delete should succeed");

    assert_eq!(
        harness.administration_repository.operations(),
        vec!["drop_user", "drop_database", "flush"]
    );
    assert_eq!(
        harness.administration_repository.calls_for("drop_user")[0]
            .username
            .as_deref(),
        Some("u1_AbCdEf1234")
    );
    assert_eq!(
        harness.administration_repository.calls_for("drop_database")[0]
            .database
            .as_deref(),
        Some("s1_example")
    );
    assert!(harness.metadata_repository.entries().is_empty());
    assert_eq!(
        harness.audit_repository.saved_event_names(),
        vec![
            "database_delete_started".to_string(),
            "database_delete_succeeded".to_string(),
        ]
    );
}

#[tokio::test]
async fn handle_delete_keeps_record_when_remote_drop_fails() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(1, None));
    harness
        .metadata_repository
        .seed(provisioned_database(7, 1, 1, "s1_example"));
    harness.administration_repository.fail_on("drop_database");

    let result = harness
        .service
        .handle_delete(DeleteProvisionedDatabaseCommand::new(database_id(7)))
        .await;

    assert!(matches!(
        result,
        Err(ProvisionerDomainError::RemoteProvisioningError(_))
    ));
    assert_eq!(
        harness.administration_repository.operations(),
        vec!["drop_user", "drop_database"]
    );
    assert!(harness.metadata_repository.contains_name("s1_example"));
    assert_eq!(
        harness.audit_repository.saved_event_names(),
        vec![
            "database_delete_started".to_string(),
            "database_delete_failed".to_string(),
        ]
    );
}

#[tokio::test]
async fn handle_delete_succeeds_when_record_is_already_gone() {
    let harness = default_harness();

    let result = harness
        .service
        .handle_delete(DeleteProvisionedDatabaseCommand::new(database_id(42)))
        .await;

    assert!(result.is_ok());
    assert!(harness.administration_repository.calls().is_empty());
    assert!(harness.audit_repository.saved_event_names().is_empty());
}

#[tokio::test]
async fn handle_delete_can_be_repeated() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(1, None));
    harness
        .metadata_repository
        .seed(provisioned_database(7, 1, 1, "s1_example"));

    for _ in 0..2 {
        harness
            .service
            .handle_delete(DeleteProvisionedDatabaseCommand::new(database_id(7)))
            .await
            .expect("delete should succeed");
    }

    assert_eq!(harness.administration_repository.calls_for("drop_user").len(), 1);
}

#[tokio::test]
async fn handle_delete_scoped_to_another_server_is_not_found() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(1, None));
    harness
        .metadata_repository
        .seed(provisioned_database(7, 1, 1, "s1_example"));

    let result = harness
        .service
        .handle_delete(
            DeleteProvisionedDatabaseCommand::new(database_id(7)).scoped_to_server(server_id(2)),
        )
        .await;

    assert!(matches!(result, Err(ProvisionerDomainError::DatabaseNotFound)));
    assert!(harness.administration_repository.calls().is_empty());
    assert!(harness.metadata_repository.contains_name("s1_example"));
}

#[tokio::test]
async fn handle_delete_scoped_to_owner_succeeds() {
    let harness = default_harness();
    harness.host_repository.seed(database_host(1, None));
    harness
        .metadata_repository
        .seed(provisioned_database(7, 1, 1, "s1_example"));

    let result = harness
        .service
        .handle_delete(
            DeleteProvisionedDatabaseCommand::new(database_id(7)).scoped_to_server(server_id(1)),
        )
        .await;

    assert!(result.is_ok());
    assert!(harness.metadata_repository.entries().is_empty());
}
