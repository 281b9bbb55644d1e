use thiserror::Error;

use crate::storage::RecordId;

/// The only failure a keyed store can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record {0} not found")]
    NotFound(RecordId),
}

impl StoreError {
    /// The id the caller asked for.
    pub fn id(&self) -> RecordId {
        match self {
            StoreError::NotFound(id) => *id,
        }
    }
}
