//! Post entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post publication status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not yet visible to readers.
    Draft,
    /// Publicly visible.
    Published,
    /// Retired from the site but never deleted.
    Archived,
}

/// Editorial shape of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Article,
    News,
    Tutorial,
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,

    pub title: String,

    /// URL-safe identifier, unique across all posts.
    pub slug: String,

    /// Short summary shown on list pages.
    pub excerpt: Option<String>,

    /// Full body text.
    pub content: String,

    /// Author user ID.
    pub author_id: i64,

    /// Category ID, if the post is categorized.
    pub category_id: Option<i64>,

    /// IDs of the tags attached to this post.
    pub tag_ids: Vec<i64>,

    pub post_type: PostType,

    pub status: PostStatus,

    /// Whether the post is pinned to the featured slots.
    pub is_featured: bool,

    /// Whether readers may comment on this post.
    pub is_comments_enabled: bool,

    /// Total view counter (denormalized).
    pub view_count: i64,

    /// Estimated reading time in minutes.
    pub reading_time_minutes: Option<u32>,

    /// Publication timestamp; unset for drafts.
    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert shape for a post; the store assigns the ID.
#[derive(Clone, Debug)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author_id: i64,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub post_type: PostType,
    pub status: PostStatus,
    pub is_featured: bool,
    pub is_comments_enabled: bool,
    pub view_count: i64,
    pub reading_time_minutes: Option<u32>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Effective publication timestamp used for recency ordering:
    /// `published_at` when set, `created_at` otherwise.
    #[must_use]
    pub fn effective_published_at(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// Whether the post carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tag_ids.contains(&tag_id)
    }
}
