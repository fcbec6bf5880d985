pub mod provisioned_database_created_event;
pub mod provisioned_database_deleted_event;
