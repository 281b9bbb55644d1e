use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::User;
use super::repository::UserRepository;
use crate::errors::StoreError;
use crate::storage::{RecordId, SharedStore};

/// User operations independent of the web framework.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl Default for UserService {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self { Self { repo } }

    /// Service backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(SharedStore::<User>::new()))
    }

    /// Store a user and return its id.
    ///
    /// # Examples
    /// ```
    /// use service::users::{User, UserService};
    /// let svc = UserService::in_memory();
    /// let user = User { first_name: "Peter".into(), last_name: "Higgs".into(), age: 92 };
    /// let id = tokio_test::block_on(svc.create(user));
    /// assert_eq!(id, 0);
    /// ```
    #[instrument(skip(self, user), fields(first_name = %user.first_name, last_name = %user.last_name))]
    pub async fn create(&self, user: User) -> RecordId {
        let id = self.repo.create(user).await;
        info!(user_id = id, "user_created");
        id
    }

    /// Look up a user by id.
    ///
    /// # Examples
    /// ```
    /// use service::{errors::StoreError, users::UserService};
    /// let svc = UserService::in_memory();
    /// assert_eq!(tokio_test::block_on(svc.find(-1)), Err(StoreError::NotFound(-1)));
    /// ```
    #[instrument(skip(self))]
    pub async fn find(&self, id: RecordId) -> Result<User, StoreError> {
        let res = self.repo.find(id).await;
        if res.is_err() {
            debug!(user_id = id, "user_not_found");
        }
        res
    }

    /// Remove a user and return it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> Result<User, StoreError> {
        match self.repo.delete(id).await {
            Ok(user) => {
                info!(user_id = id, "user_deleted");
                Ok(user)
            }
            Err(e) => {
                debug!(user_id = id, "user_not_found");
                Err(e)
            }
        }
    }
}
