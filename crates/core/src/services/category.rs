//! Category service.

use quillpress_common::AppResult;
use quillpress_store::entities::Category;
use quillpress_store::repositories::{CategoryRepository, CategoryWithCount};

/// Category service for business logic.
#[derive(Clone)]
pub struct CategoryService {
    category_repo: CategoryRepository,
}

impl CategoryService {
    /// Create a new category service.
    #[must_use]
    pub const fn new(category_repo: CategoryRepository) -> Self {
        Self { category_repo }
    }

    /// Get all categories in store order.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.category_repo.find_all().await
    }

    /// Get a category by slug. Unknown slugs are `None`, not errors.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        self.category_repo.find_by_slug(slug).await
    }

    /// Get every category with its post count, in store order.
    /// Navigation renders only the non-zero entries; the zero counts
    /// are left in so callers can decide.
    pub async fn list_with_counts(&self) -> AppResult<Vec<CategoryWithCount>> {
        self.category_repo.find_with_post_counts().await
    }
}
