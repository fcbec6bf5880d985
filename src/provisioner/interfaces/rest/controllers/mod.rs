pub mod database_host_rest_controller;
pub mod provisioner_rest_controller;
