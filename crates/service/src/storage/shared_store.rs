use std::sync::Arc;
use tokio::sync::RwLock;

use super::keyed_store::{KeyedStore, RecordId};
use crate::errors::StoreError;

/// Cloneable, lock-guarded handle to a [`KeyedStore`].
///
/// `find` takes the read lock, `create` and `delete` take the write lock.
/// Nothing awaits while a guard is held.
#[derive(Debug)]
pub struct SharedStore<T> {
    inner: Arc<RwLock<KeyedStore<T>>>,
}

impl<T> Clone for SharedStore<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Default for SharedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SharedStore<T> {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(KeyedStore::new())) }
    }

    pub async fn create(&self, value: T) -> RecordId {
        let mut store = self.inner.write().await;
        store.create(value)
    }

    pub async fn delete(&self, id: RecordId) -> Result<T, StoreError> {
        let mut store = self.inner.write().await;
        store.delete(id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<T: Clone> SharedStore<T> {
    /// Clone out the value stored under `id`.
    pub async fn find(&self, id: RecordId) -> Result<T, StoreError> {
        let store = self.inner.read().await;
        store.find(id).cloned()
    }
}
