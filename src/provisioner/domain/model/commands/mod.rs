pub mod create_provisioned_database_command;
pub mod delete_database_host_command;
pub mod delete_provisioned_database_command;
pub mod deploy_provisioned_database_command;
pub mod register_database_host_command;
pub mod rotate_provisioned_database_password_command;
