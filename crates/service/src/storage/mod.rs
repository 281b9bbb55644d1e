//! Storage abstractions for service layer
//!
//! `KeyedStore` is the plain in-memory map with store-assigned ids;
//! `SharedStore` wraps it in a lock so request handlers can share it.

pub mod keyed_store;
pub mod shared_store;

pub use keyed_store::{KeyedStore, RecordId, StoredRecord};
pub use shared_store::SharedStore;
