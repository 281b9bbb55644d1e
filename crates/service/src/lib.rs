//! Service layer: the generic keyed record store and the user operations
//! built on top of it.
//! - `storage` holds the store itself, free of any web framework types.
//! - `users` wires the store to the `User` domain type.

pub mod errors;
pub mod storage;
pub mod users;
