use std::collections::HashSet;

use regex::Regex;
use server_database_provisioner::provisioner::domain::model::value_objects::{
    database_password::{DATABASE_PASSWORD_LENGTH, DatabasePassword},
    database_username::DatabaseUsername,
    remote_access_pattern::RemoteAccessPattern,
};

use crate::support::server_id;

#[test]
fn generated_username_carries_the_server_id() {
    let username = DatabaseUsername::generate(&server_id(42));

    let pattern = Regex::new(r"^u42_[A-Za-z0-9]{10}$").expect("valid regex");
    assert!(pattern.is_match(username.value()));
}

#[test]
fn generated_password_has_fixed_length_and_no_quote_characters() {
    for _ in 0..50 {
        let password = DatabasePassword::generate();

        assert_eq!(password.value().len(), DATABASE_PASSWORD_LENGTH);
        assert!(
            !password
                .value()
                .chars()
                .any(|c| matches!(c, '\'' | '"' | '\\' | '`'))
        );
    }
}

#[test]
fn generated_credentials_are_independent() {
    let usernames: HashSet<String> = (0..20)
        .map(|_| DatabaseUsername::generate(&server_id(1)).value().to_string())
        .collect();
    let passwords: HashSet<String> = (0..20)
        .map(|_| DatabasePassword::generate().value().to_string())
        .collect();

    assert_eq!(usernames.len(), 20);
    assert_eq!(passwords.len(), 20);

    let username = DatabaseUsername::generate(&server_id(1));
    let password = DatabasePassword::generate();
    assert_ne!(username.value(), password.value());
}

#[test]
fn password_debug_output_is_redacted() {
    let password = DatabasePassword::generate();

    assert!(!format!("{password:?}").contains(password.value()));
}

#[test]
fn remote_pattern_defaults_to_any_host() {
    let remote = RemoteAccessPattern::new(None).expect("default remote");

    assert_eq!(remote.value(), "%");
}

#[test]
fn remote_pattern_rejects_quotes_and_letters() {
    assert!(RemoteAccessPattern::new(Some("192.168.%".to_string())).is_ok());
    assert!(RemoteAccessPattern::new(Some("10.0.0.0/255.0.0.0".to_string())).is_ok());
    assert!(RemoteAccessPattern::new(Some("host'--".to_string())).is_err());
    assert!(RemoteAccessPattern::new(Some("localhost".to_string())).is_err());
}
