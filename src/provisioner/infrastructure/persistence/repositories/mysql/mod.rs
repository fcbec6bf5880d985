pub mod host_pool_cache;
pub mod sqlx_mysql_database_administration_repository_impl;
