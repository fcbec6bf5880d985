pub mod database_host;
pub mod issued_database_credentials;
pub mod provisioned_database;
pub mod server;
