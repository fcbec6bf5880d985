pub mod database_host_connection;
pub mod database_host_id;
pub mod database_password;
pub mod database_username;
pub mod provisioned_database_id;
pub mod provisioned_database_name;
pub mod remote_access_pattern;
pub mod server_id;
