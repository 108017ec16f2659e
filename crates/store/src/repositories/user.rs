//! User repository.

use std::sync::Arc;

use quillpress_common::AppResult;

use crate::entities::User;
use crate::store::CollectionStore;

/// User repository for store operations.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<CollectionStore>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let cols = self.store.read().await;
        Ok(cols.users.iter().find(|u| u.id == id).cloned())
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let cols = self.store.read().await;
        Ok(cols.users.iter().find(|u| u.username == username).cloned())
    }
}
