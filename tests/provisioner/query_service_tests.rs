use server_database_provisioner::provisioner::domain::{
    model::{
        enums::provisioner_domain_error::ProvisionerDomainError,
        queries::{
            get_provisioned_database_query::GetProvisionedDatabaseQuery,
            list_provisioned_databases_query::ListProvisionedDatabasesQuery,
        },
    },
    services::database_provisioning_query_service::DatabaseProvisioningQueryService,
};

use crate::support::{database_id, default_harness, provisioned_database, server_id};

#[tokio::test]
async fn handle_list_returns_only_the_servers_databases() {
    let harness = default_harness();
    harness
        .metadata_repository
        .seed(provisioned_database(1, 1, 1, "s1_first"));
    harness
        .metadata_repository
        .seed(provisioned_database(2, 2, 1, "s2_other"));
    harness
        .metadata_repository
        .seed(provisioned_database(3, 1, 1, "s1_second"));

    let databases = harness
        .query_service
        .handle_list(ListProvisionedDatabasesQuery::new(server_id(1)))
        .await
        .expect("list should succeed");

    let names: Vec<&str> = databases
        .iter()
        .map(|database| database.database_name().value())
        .collect();
    assert_eq!(names, vec!["s1_first", "s1_second"]);
}

#[tokio::test]
async fn handle_get_returns_an_owned_database() {
    let harness = default_harness();
    harness
        .metadata_repository
        .seed(provisioned_database(4, 1, 1, "s1_example"));

    let database = harness
        .query_service
        .handle_get(GetProvisionedDatabaseQuery::new(server_id(1), database_id(4)))
        .await
        .expect("get should succeed");

    assert_eq!(database.database_name().value(), "s1_example");
}

#[tokio::test]
async fn handle_get_hides_databases_of_other_servers() {
    let harness = default_harness();
    harness
        .metadata_repository
        .seed(provisioned_database(4, 1, 1, "s1_example"));

    let result = harness
        .query_service
        .handle_get(GetProvisionedDatabaseQuery::new(server_id(2), database_id(4)))
        .await;

    assert!(matches!(result, Err(ProvisionerDomainError::DatabaseNotFound)));
}
