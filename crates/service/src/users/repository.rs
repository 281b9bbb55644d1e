use async_trait::async_trait;

use super::domain::User;
use crate::errors::StoreError;
use crate::storage::{RecordId, SharedStore};

/// Repository abstraction for user storage.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> RecordId;
    async fn find(&self, id: RecordId) -> Result<User, StoreError>;
    async fn delete(&self, id: RecordId) -> Result<User, StoreError>;
}

#[async_trait]
impl UserRepository for SharedStore<User> {
    async fn create(&self, user: User) -> RecordId { SharedStore::create(self, user).await }
    async fn find(&self, id: RecordId) -> Result<User, StoreError> { SharedStore::find(self, id).await }
    async fn delete(&self, id: RecordId) -> Result<User, StoreError> { SharedStore::delete(self, id).await }
}
