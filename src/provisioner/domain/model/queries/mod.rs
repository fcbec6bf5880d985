pub mod get_provisioned_database_query;
pub mod list_provisioned_databases_query;
