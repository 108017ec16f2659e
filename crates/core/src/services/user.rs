//! User service.

use quillpress_common::AppResult;
use quillpress_store::entities::User;
use quillpress_store::repositories::UserRepository;

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// Get a user by ID.
    pub async fn get(&self, user_id: i64) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(user_id).await
    }

    /// Get a user by username.
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_username(username).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quillpress_store::{CollectionStore, seed};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_lookup_by_id_and_username_agree() {
        let store = Arc::new(CollectionStore::new());
        seed(&store).await.unwrap();
        let service = UserService::new(UserRepository::new(store));

        let by_name = service.get_by_username("janesmith").await.unwrap().unwrap();
        let by_id = service.get(by_name.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "janesmith");
        assert!(!by_id.is_admin);
    }
}
