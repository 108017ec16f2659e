//! Tag service.

use quillpress_common::AppResult;
use quillpress_store::entities::Tag;
use quillpress_store::repositories::{TagRepository, TagWithCount};

/// Popular tags shown when the caller supplies no limit.
pub const DEFAULT_POPULAR_TAG_LIMIT: usize = 10;

/// Tag service for business logic.
#[derive(Clone)]
pub struct TagService {
    tag_repo: TagRepository,
}

impl TagService {
    /// Create a new tag service.
    #[must_use]
    pub const fn new(tag_repo: TagRepository) -> Self {
        Self { tag_repo }
    }

    /// Get all tags in store order.
    pub async fn list(&self) -> AppResult<Vec<Tag>> {
        self.tag_repo.find_all().await
    }

    /// Get the most-used tags with their post counts, most used first.
    pub async fn popular(&self, limit: usize) -> AppResult<Vec<TagWithCount>> {
        self.tag_repo.find_popular(limit).await
    }
}
