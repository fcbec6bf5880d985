pub mod mysql;
pub mod postgres;
pub mod database_administration_repository;
pub mod database_host_repository;
pub mod provisioned_database_repository;
pub mod provisioning_audit_event_repository;
pub mod server_repository;
