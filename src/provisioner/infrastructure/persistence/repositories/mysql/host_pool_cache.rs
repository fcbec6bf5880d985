use std::{collections::HashMap, future::Future};

use tokio::sync::RwLock;

use crate::provisioner::domain::model::value_objects::database_host_connection::DatabaseHostConnection;

/// Connection pools keyed by the full administrative login of a host.
///
/// The password is part of the key, so a login that differs only in its
/// password never reuses a pool authenticated with other credentials.
pub struct HostPoolCache<P> {
    pools: RwLock<HashMap<DatabaseHostConnection, P>>,
}

impl<P: Clone> HostPoolCache<P> {
    pub fn new() -> Self {
        Self {
            pools: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get_or_connect<F, Fut, E>(
        &self,
        host: &DatabaseHostConnection,
        connect: F,
    ) -> Result<P, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<P, E>>,
    {
        {
            let read_guard = self.pools.read().await;
            if let Some(pool) = read_guard.get(host) {
                return Ok(pool.clone());
            }
        }

        let pool = connect().await?;

        let mut write_guard = self.pools.write().await;
        if let Some(existing) = write_guard.get(host) {
            return Ok(existing.clone());
        }

        write_guard.insert(host.clone(), pool.clone());
        Ok(pool)
    }

    pub async fn evict(&self, host: &DatabaseHostConnection) -> Option<P> {
        self.pools.write().await.remove(host)
    }

    pub async fn len(&self) -> usize {
        self.pools.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pools.read().await.is_empty()
    }
}

impl<P: Clone> Default for HostPoolCache<P> {
    fn default() -> Self {
        Self::new()
    }
}
