//! Post repository.

use std::sync::Arc;

use quillpress_common::{AppError, AppResult};

use crate::entities::{Post, PostStatus};
use crate::repositories::{PageRequest, PaginatedResponse};
use crate::store::CollectionStore;

/// Filter predicates for post listings. All supplied predicates are
/// combined with logical AND; unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Exact category match.
    pub category_id: Option<i64>,
    /// Membership in the post's tag set.
    pub tag_id: Option<i64>,
    /// Exact featured-flag match.
    pub featured: Option<bool>,
    /// Exact status match.
    pub status: Option<PostStatus>,
}

impl PostFilter {
    fn matches(&self, post: &Post) -> bool {
        if let Some(category_id) = self.category_id
            && post.category_id != Some(category_id)
        {
            return false;
        }
        if let Some(tag_id) = self.tag_id
            && !post.has_tag(tag_id)
        {
            return false;
        }
        if let Some(featured) = self.featured
            && post.is_featured != featured
        {
            return false;
        }
        if let Some(status) = self.status
            && post.status != status
        {
            return false;
        }
        true
    }
}

/// Post repository for store operations.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<CollectionStore>,
}

impl PostRepository {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    /// Find a post by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        let cols = self.store.read().await;
        Ok(cols.posts.iter().find(|p| p.id == id).cloned())
    }

    /// Find a post by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Post>> {
        let cols = self.store.read().await;
        Ok(cols.posts.iter().find(|p| p.slug == slug).cloned())
    }

    /// Produce a filtered, sorted, paginated view of the posts.
    ///
    /// Matching posts are sorted by effective publish timestamp,
    /// newest first; the sort is stable so ties keep insertion order.
    /// A page past the end yields an empty `data` slice with correct
    /// metadata. `page` or `page_size` of 0 is rejected.
    pub async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<Post>> {
        if page.page == 0 {
            return Err(AppError::InvalidArgument("page must be >= 1".to_string()));
        }
        if page.page_size == 0 {
            return Err(AppError::InvalidArgument(
                "page_size must be >= 1".to_string(),
            ));
        }

        let cols = self.store.read().await;
        let mut matched: Vec<Post> = cols
            .posts
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        drop(cols);

        matched.sort_by(|a, b| b.effective_published_at().cmp(&a.effective_published_at()));

        let total = matched.len();
        let total_pages = total.div_ceil(page.page_size);
        let start = (page.page - 1).saturating_mul(page.page_size);
        let data: Vec<Post> = matched
            .into_iter()
            .skip(start)
            .take(page.page_size)
            .collect();

        Ok(PaginatedResponse {
            data,
            total,
            page: page.page,
            page_size: page.page_size,
            total_pages,
        })
    }

    /// Get featured published posts, newest first.
    pub async fn find_featured(&self, limit: usize) -> AppResult<Vec<Post>> {
        let cols = self.store.read().await;
        let mut featured: Vec<Post> = cols
            .posts
            .iter()
            .filter(|p| p.is_featured && p.status == PostStatus::Published)
            .cloned()
            .collect();
        drop(cols);

        featured.sort_by(|a, b| b.effective_published_at().cmp(&a.effective_published_at()));
        featured.truncate(limit);
        Ok(featured)
    }

    /// Get the most-viewed posts.
    ///
    /// Matches the historical behavior of the reading client: posts of
    /// every status are ranked, including drafts. Ties keep insertion
    /// order.
    pub async fn find_popular(&self, limit: usize) -> AppResult<Vec<Post>> {
        let cols = self.store.read().await;
        let mut popular: Vec<Post> = cols.posts.clone();
        drop(cols);

        popular.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        popular.truncate(limit);
        Ok(popular)
    }

    /// Get published posts related to the given post: those sharing
    /// its category or at least one tag, in store order.
    ///
    /// An unknown `post_id` yields an empty list rather than an error.
    /// Sharing a category requires both posts to actually have one;
    /// two uncategorized posts are not related.
    pub async fn find_related(&self, post_id: i64, limit: usize) -> AppResult<Vec<Post>> {
        let cols = self.store.read().await;
        let Some(reference) = cols.posts.iter().find(|p| p.id == post_id) else {
            return Ok(vec![]);
        };

        let related: Vec<Post> = cols
            .posts
            .iter()
            .filter(|p| p.id != post_id && p.status == PostStatus::Published)
            .filter(|p| {
                let shares_category =
                    reference.category_id.is_some() && p.category_id == reference.category_id;
                let shares_tag = p.tag_ids.iter().any(|t| reference.has_tag(*t));
                shares_category || shares_tag
            })
            .take(limit)
            .cloned()
            .collect();

        Ok(related)
    }

    /// Case-insensitive substring search over title, excerpt, content,
    /// and tag names. No ranking; store order.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Post>> {
        let needle = query.to_lowercase();
        let cols = self.store.read().await;

        let matched: Vec<Post> = cols
            .posts
            .iter()
            .filter(|p| {
                if p.title.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
                {
                    return true;
                }
                if let Some(excerpt) = &p.excerpt
                    && excerpt.to_lowercase().contains(&needle)
                {
                    return true;
                }
                cols.tags
                    .iter()
                    .filter(|t| p.has_tag(t.id))
                    .any(|t| t.name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        Ok(matched)
    }

    /// Increment a post's view counter, returning the new count.
    pub async fn increment_view_count(&self, post_id: i64) -> AppResult<i64> {
        self.store.increment_post_view_count(post_id).await
    }
}
