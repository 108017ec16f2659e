//! Category repository.

use std::sync::Arc;

use quillpress_common::AppResult;
use serde::Serialize;

use crate::entities::Category;
use crate::store::CollectionStore;

/// A category paired with the number of posts referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub post_count: usize,
}

/// Category repository for store operations.
#[derive(Clone)]
pub struct CategoryRepository {
    store: Arc<CollectionStore>,
}

impl CategoryRepository {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    /// Get all categories in store order.
    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        let cols = self.store.read().await;
        Ok(cols.categories.clone())
    }

    /// Find a category by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        let cols = self.store.read().await;
        Ok(cols.categories.iter().find(|c| c.slug == slug).cloned())
    }

    /// Get every category with its post count, preserving store order.
    ///
    /// Posts of every status are counted; callers wanting only
    /// non-empty categories filter on `post_count` themselves.
    pub async fn find_with_post_counts(&self) -> AppResult<Vec<CategoryWithCount>> {
        let cols = self.store.read().await;
        let counts = cols
            .categories
            .iter()
            .map(|category| CategoryWithCount {
                post_count: cols
                    .posts
                    .iter()
                    .filter(|p| p.category_id == Some(category.id))
                    .count(),
                category: category.clone(),
            })
            .collect();
        Ok(counts)
    }
}
