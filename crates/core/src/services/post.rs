//! Post service.

use quillpress_common::AppResult;
use quillpress_store::entities::Post;
use quillpress_store::repositories::{PageRequest, PaginatedResponse, PostFilter, PostRepository};

/// Featured posts shown when the caller supplies no limit.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;
/// Popular posts shown when the caller supplies no limit.
pub const DEFAULT_POPULAR_LIMIT: usize = 5;
/// Related posts shown when the caller supplies no limit.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Post service for business logic.
#[derive(Clone)]
pub struct PostService {
    post_repo: PostRepository,
}

impl PostService {
    /// Create a new post service.
    #[must_use]
    pub const fn new(post_repo: PostRepository) -> Self {
        Self { post_repo }
    }

    /// List posts with optional filters, newest first, paginated.
    pub async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<Post>> {
        self.post_repo.list(filter, page).await
    }

    /// Get a single post by slug. Unknown slugs are `None`, not errors.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Post>> {
        self.post_repo.find_by_slug(slug).await
    }

    /// Get featured published posts, newest first.
    pub async fn featured(&self, limit: usize) -> AppResult<Vec<Post>> {
        self.post_repo.find_featured(limit).await
    }

    /// Get the most-viewed posts.
    pub async fn popular(&self, limit: usize) -> AppResult<Vec<Post>> {
        self.post_repo.find_popular(limit).await
    }

    /// Get published posts related to the given one by category or tag
    /// overlap. Unknown IDs yield an empty list.
    pub async fn related(&self, post_id: i64, limit: usize) -> AppResult<Vec<Post>> {
        self.post_repo.find_related(post_id, limit).await
    }

    /// Case-insensitive substring search over title, excerpt, content,
    /// and tag names.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Post>> {
        let found = self.post_repo.search(query).await?;
        tracing::debug!(query, results = found.len(), "Searched posts");
        Ok(found)
    }

    /// Record one view of a post, returning the new count.
    pub async fn record_view(&self, post_id: i64) -> AppResult<i64> {
        let count = self.post_repo.increment_view_count(post_id).await?;
        tracing::debug!(post_id, view_count = count, "Recorded view");
        Ok(count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quillpress_common::AppError;
    use quillpress_store::{CollectionStore, seed};
    use std::sync::Arc;

    async fn service() -> PostService {
        let store = Arc::new(CollectionStore::new());
        seed(&store).await.unwrap();
        PostService::new(PostRepository::new(store))
    }

    #[tokio::test]
    async fn test_get_by_slug_unknown_is_none() {
        let service = service().await;
        let post = service.get_by_slug("no-such-post").await.unwrap();
        assert!(post.is_none());
    }

    #[tokio::test]
    async fn test_featured_defaults_fit_front_page() {
        let service = service().await;
        let featured = service.featured(DEFAULT_FEATURED_LIMIT).await.unwrap();
        assert!(featured.len() <= DEFAULT_FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.is_featured));
    }

    #[tokio::test]
    async fn test_popular_one_returns_highest_view_count() {
        let service = service().await;
        let popular = service.popular(1).await.unwrap();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].view_count, 3_100);
    }

    #[tokio::test]
    async fn test_record_view_unknown_post_fails() {
        let service = service().await;
        let err = service.record_view(999).await.unwrap_err();
        assert!(matches!(err, AppError::PostNotFound(999)));
    }
}
