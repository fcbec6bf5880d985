pub mod sqlx_database_host_repository_impl;
pub mod sqlx_provisioned_database_repository_impl;
pub mod sqlx_provisioning_audit_event_repository_impl;
pub mod sqlx_server_repository_impl;
