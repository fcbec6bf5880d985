pub mod create_provisioned_database_request_resource;
pub mod database_host_resource;
pub mod deploy_provisioned_database_request_resource;
pub mod error_response_resource;
pub mod provisioned_database_resource;
pub mod register_database_host_request_resource;
