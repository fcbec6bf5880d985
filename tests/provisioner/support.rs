#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{
    DEFAULT_NODE_ID, create_command, database_host, database_id, host_id, provisioned_database,
    server, server_id, server_on_node,
};
pub use harness::{create_harness, default_harness};
