pub mod best_effort;
pub mod command_services;
pub mod query_services;
