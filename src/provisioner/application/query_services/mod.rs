pub mod database_host_query_service_impl;
pub mod database_provisioning_query_service_impl;
