use chrono::{DateTime, Utc};

use crate::provisioner::domain::model::value_objects::{
    database_host_connection::DatabaseHostConnection, database_host_id::DatabaseHostId,
};

#[derive(Clone, Debug)]
pub struct DatabaseHost {
    id: DatabaseHostId,
    name: String,
    connection: DatabaseHostConnection,
    node_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl DatabaseHost {
    pub fn restore(
        id: DatabaseHostId,
        name: String,
        connection: DatabaseHostConnection,
        node_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            connection,
            node_id,
            created_at,
        }
    }

    pub fn id(&self) -> &DatabaseHostId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> &DatabaseHostConnection {
        &self.connection
    }

    pub fn node_id(&self) -> Option<i64> {
        self.node_id
    }

    pub fn is_linked_to_node(&self, node_id: i64) -> bool {
        self.node_id == Some(node_id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
