use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Identifier assigned by a store on insertion. Lookups accept any value,
/// but the store only ever hands out `0, 1, 2, ...`.
pub type RecordId = i64;

/// A value together with the id it is stored under.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRecord<T> {
    pub id: RecordId,
    pub value: T,
}

/// In-memory map from store-assigned ids to values.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice even after its record has been deleted. The store does
/// no locking of its own; see [`SharedStore`](super::SharedStore) for the
/// handle used by concurrent callers.
#[derive(Debug, Clone)]
pub struct KeyedStore<T> {
    records: HashMap<RecordId, T>,
    next_id: RecordId,
}

impl<T> Default for KeyedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyedStore<T> {
    pub fn new() -> Self {
        Self { records: HashMap::new(), next_id: 0 }
    }

    /// Store `value` under a fresh id and return that id.
    pub fn create(&mut self, value: T) -> RecordId {
        let id = self.next_id;
        self.records.insert(id, value);
        self.next_id += 1;
        id
    }

    /// Borrow the value stored under `id`.
    pub fn find(&self, id: RecordId) -> Result<&T, StoreError> {
        self.records.get(&id).ok_or(StoreError::NotFound(id))
    }

    /// Remove and return the value stored under `id`. The id is retired for good.
    pub fn delete(&mut self, id: RecordId) -> Result<T, StoreError> {
        self.records.remove(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// The id the next `create` will return.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Clone> KeyedStore<T> {
    /// Clone out the record stored under `id`.
    pub fn get_record(&self, id: RecordId) -> Result<StoredRecord<T>, StoreError> {
        self.find(id).map(|value| StoredRecord { id, value: value.clone() })
    }
}
