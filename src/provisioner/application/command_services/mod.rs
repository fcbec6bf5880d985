pub mod database_host_command_service_impl;
pub mod database_provisioning_command_service_impl;
