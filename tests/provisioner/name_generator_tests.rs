use server_database_provisioner::provisioner::domain::model::value_objects::provisioned_database_name::{
    MAX_DATABASE_NAME_LENGTH, ProvisionedDatabaseName,
};

use crate::support::server_id;

#[test]
fn generate_unique_prefixes_the_label_with_the_server() {
    let name = ProvisionedDatabaseName::generate_unique("example", &server_id(1))
        .expect("valid label");

    assert_eq!(name.value(), "s1_example");
}

#[test]
fn generate_unique_keeps_underscores_in_the_label() {
    let name = ProvisionedDatabaseName::generate_unique("something_else", &server_id(123))
        .expect("valid label");

    assert_eq!(name.value(), "s123_something_else");
}

#[test]
fn generate_unique_collapses_unsupported_characters() {
    let name = ProvisionedDatabaseName::generate_unique("  My  Blog -- 2024 ", &server_id(7))
        .expect("valid label");

    assert_eq!(name.value(), "s7_my_blog_2024");
}

#[test]
fn generate_unique_truncates_long_labels_to_the_name_limit() {
    let label = "x".repeat(100);

    let name = ProvisionedDatabaseName::generate_unique(&label, &server_id(1))
        .expect("valid label");

    assert_eq!(name.value().len(), MAX_DATABASE_NAME_LENGTH);
    assert!(name.value().starts_with("s1_"));
}

#[test]
fn generate_unique_does_not_end_with_a_separator_after_truncation() {
    let label = format!("{}-tail", "a".repeat(44));

    let name = ProvisionedDatabaseName::generate_unique(&label, &server_id(1))
        .expect("valid label");

    assert!(!name.value().ends_with('_'));
    assert!(name.value().len() <= MAX_DATABASE_NAME_LENGTH);
}

#[test]
fn generate_unique_rejects_a_label_with_nothing_usable() {
    let result = ProvisionedDatabaseName::generate_unique("---", &server_id(1));

    assert!(result.is_err());
}

#[test]
fn for_server_accepts_only_the_owning_prefix() {
    assert!(ProvisionedDatabaseName::for_server(Some("s12_orders"), &server_id(12)).is_ok());
    assert!(ProvisionedDatabaseName::for_server(Some("s1_orders"), &server_id(12)).is_err());
    assert!(ProvisionedDatabaseName::for_server(Some("s12_"), &server_id(12)).is_err());
}

#[test]
fn for_server_requires_the_exact_canonical_name() {
    assert!(ProvisionedDatabaseName::for_server(Some(" s12_orders"), &server_id(12)).is_err());
    assert!(ProvisionedDatabaseName::for_server(Some("S12_orders"), &server_id(12)).is_err());
    assert!(ProvisionedDatabaseName::for_server(Some("s12_Orders"), &server_id(12)).is_err());
    assert!(ProvisionedDatabaseName::for_server(None, &server_id(12)).is_err());
}
