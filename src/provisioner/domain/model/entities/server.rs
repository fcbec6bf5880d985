use crate::provisioner::domain::model::value_objects::server_id::ServerId;

/// Hosting-platform server that owns databases. Read-only from here.
#[derive(Clone, Debug)]
pub struct Server {
    id: ServerId,
    node_id: i64,
    database_limit: Option<u32>,
}

impl Server {
    /// `database_limit` of `None` means the server may own any number of databases.
    pub fn new(id: ServerId, node_id: i64, database_limit: Option<u32>) -> Self {
        Self {
            id,
            node_id,
            database_limit,
        }
    }

    pub fn id(&self) -> &ServerId {
        &self.id
    }

    pub fn node_id(&self) -> i64 {
        self.node_id
    }

    pub fn database_limit(&self) -> Option<u32> {
        self.database_limit
    }

    pub fn has_reached_database_limit(&self, owned_databases: u64) -> bool {
        match self.database_limit {
            Some(limit) => owned_databases >= u64::from(limit),
            None => false,
        }
    }
}
