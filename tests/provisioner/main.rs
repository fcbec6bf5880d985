mod support;

mod credential_generator_tests;
mod database_host_tests;
mod delete_provisioning_tests;
mod name_generator_tests;
mod query_service_tests;
mod rest_controller_tests;
