//! Tag repository.

use std::sync::Arc;

use quillpress_common::AppResult;
use serde::Serialize;

use crate::entities::Tag;
use crate::store::CollectionStore;

/// A tag paired with the number of posts referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagWithCount {
    #[serde(flatten)]
    pub tag: Tag,
    pub post_count: usize,
}

/// Tag repository for store operations.
#[derive(Clone)]
pub struct TagRepository {
    store: Arc<CollectionStore>,
}

impl TagRepository {
    /// Create a new tag repository.
    #[must_use]
    pub const fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    /// Get all tags in store order.
    pub async fn find_all(&self) -> AppResult<Vec<Tag>> {
        let cols = self.store.read().await;
        Ok(cols.tags.clone())
    }

    /// Get the most-used tags with their post counts, descending by
    /// count. Ties keep store order.
    pub async fn find_popular(&self, limit: usize) -> AppResult<Vec<TagWithCount>> {
        let cols = self.store.read().await;
        let mut counted: Vec<TagWithCount> = cols
            .tags
            .iter()
            .map(|tag| TagWithCount {
                post_count: cols.posts.iter().filter(|p| p.has_tag(tag.id)).count(),
                tag: tag.clone(),
            })
            .collect();
        drop(cols);

        counted.sort_by(|a, b| b.post_count.cmp(&a.post_count));
        counted.truncate(limit);
        Ok(counted)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entities::{NewPost, NewTag, NewUser, PostStatus, PostType};
    use chrono::Utc;

    async fn fixture() -> TagRepository {
        let store = Arc::new(CollectionStore::new());
        store
            .insert_user(NewUser {
                username: "author".to_string(),
                email: "author@example.com".to_string(),
                full_name: None,
                bio: None,
                avatar_url: None,
                website_url: None,
                is_active: true,
                is_admin: false,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        for name in ["React", "TypeScript", "CSS"] {
            store
                .insert_tag(NewTag {
                    name: name.to_string(),
                    slug: name.to_lowercase(),
                    description: None,
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }
        TagRepository::new(store)
    }

    fn post(slug: &str, tag_ids: Vec<i64>) -> NewPost {
        NewPost {
            title: slug.to_string(),
            slug: slug.to_string(),
            excerpt: None,
            content: "body".to_string(),
            author_id: 1,
            category_id: None,
            tag_ids,
            post_type: PostType::Article,
            status: PostStatus::Published,
            is_featured: false,
            is_comments_enabled: true,
            view_count: 0,
            reading_time_minutes: None,
            published_at: Some(Utc::now()),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_popular_sorted_by_count() {
        let repo = fixture().await;
        repo.store.insert_post(post("a", vec![2])).await.unwrap();
        repo.store.insert_post(post("b", vec![2, 3])).await.unwrap();
        repo.store.insert_post(post("c", vec![3])).await.unwrap();
        repo.store.insert_post(post("d", vec![2])).await.unwrap();

        let popular = repo.find_popular(10).await.unwrap();
        let summary: Vec<(&str, usize)> = popular
            .iter()
            .map(|t| (t.tag.slug.as_str(), t.post_count))
            .collect();
        assert_eq!(
            summary,
            vec![("typescript", 3), ("css", 2), ("react", 0)]
        );
    }

    #[tokio::test]
    async fn test_popular_limit_applies() {
        let repo = fixture().await;
        let popular = repo.find_popular(1).await.unwrap();
        assert_eq!(popular.len(), 1);

        let none = repo.find_popular(0).await.unwrap();
        assert!(none.is_empty());
    }
}
