//! Users module: domain type, repository abstraction and service.
//!
//! The HTTP layer talks to `UserService`; storage is reached only through
//! the `UserRepository` trait.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::User;
pub use repository::UserRepository;
pub use service::UserService;
