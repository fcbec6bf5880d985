pub mod database_host_command_service;
pub mod database_host_query_service;
pub mod database_provisioning_command_service;
pub mod database_provisioning_query_service;
