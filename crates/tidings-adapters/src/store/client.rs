//! In-memory notification client store.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use tidings_core::{
    application::{ApplicationError, ports::ClientStore},
    domain::{ClientId, ClientRegistry, NotificationClient},
    error::TidingsResult,
};

/// Thread-safe in-memory client store.
#[derive(Clone, Default)]
pub struct InMemoryClientStore {
    inner: Arc<RwLock<HashMap<ClientId, NotificationClient>>>,
}

impl InMemoryClientStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `clients`.
    pub fn with_clients(
        clients: impl IntoIterator<Item = NotificationClient>,
    ) -> TidingsResult<Self> {
        let store = Self::new();
        for client in clients {
            store.insert(client)?;
        }
        Ok(store)
    }

    /// Get the number of clients.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Registry lookups cannot fail, so they read through a poisoned lock.
    fn with_client<T>(&self, id: &ClientId, f: impl FnOnce(&NotificationClient) -> T) -> Option<T> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(id).map(f)
    }
}

impl ClientRegistry for InMemoryClientStore {
    fn contains(&self, client: &ClientId) -> bool {
        self.with_client(client, |_| ()).is_some()
    }

    fn is_manager(&self, client: &ClientId) -> bool {
        self.with_client(client, |c| c.is_client_manager)
            .unwrap_or(false)
    }

    fn managed_by(&self, client: &ClientId) -> Option<ClientId> {
        self.with_client(client, |c| c.managed_by.clone()).flatten()
    }

    fn list_managed_clients(&self, manager: &ClientId) -> Vec<ClientId> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut managed: Vec<_> = inner
            .values()
            .filter(|c| c.is_managed_by(manager))
            .map(|c| c.id.clone())
            .collect();
        managed.sort();
        managed
    }
}

impl ClientStore for InMemoryClientStore {
    fn get(&self, id: &ClientId) -> TidingsResult<NotificationClient> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::ClientNotFound { id: id.to_string() }.into()
        })
    }

    fn list(&self) -> TidingsResult<Vec<NotificationClient>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut clients: Vec<_> = inner.values().cloned().collect();
        clients.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(clients)
    }

    fn insert(&self, client: NotificationClient) -> TidingsResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(client.id.clone(), client);
        Ok(())
    }
}
