//! In-memory collection store.

use chrono::Utc;
use quillpress_common::{AppError, AppResult, IdAllocator};
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::entities::{
    Category, Comment, CommentAuthor, CommentStatus, NewCategory, NewComment, NewPost, NewTag,
    NewUser, Post, Tag, User,
};

/// The collections owned by the store, each kept in insertion order.
///
/// Insertion order is load-bearing: list endpoints promise stable
/// orderings, and sorts over these vectors are stable so ties fall
/// back to it.
#[derive(Debug, Default)]
pub struct Collections {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

/// Authoritative in-memory store for all blog entities.
///
/// The store owns its collections behind a single [`RwLock`], so reads
/// run concurrently while writes serialize. That keeps ID assignment
/// monotonic and guarantees a parent comment exists before any of its
/// replies. Handles are shared via `Arc`; the store is never reached
/// through global state.
#[derive(Debug)]
pub struct CollectionStore {
    collections: RwLock<Collections>,
    user_ids: IdAllocator,
    category_ids: IdAllocator,
    tag_ids: IdAllocator,
    post_ids: IdAllocator,
    comment_ids: IdAllocator,
}

impl CollectionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            user_ids: IdAllocator::new(),
            category_ids: IdAllocator::new(),
            tag_ids: IdAllocator::new(),
            post_ids: IdAllocator::new(),
            comment_ids: IdAllocator::new(),
        }
    }

    /// Acquire a read guard over the collections.
    pub async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections.read().await
    }

    /// Insert a new user.
    pub async fn insert_user(&self, new: NewUser) -> AppResult<User> {
        let mut cols = self.collections.write().await;

        if cols.users.iter().any(|u| u.username == new.username) {
            return Err(AppError::Conflict(format!(
                "username already taken: {}",
                new.username
            )));
        }
        if cols.users.iter().any(|u| u.email == new.email) {
            return Err(AppError::Conflict(format!(
                "email already registered: {}",
                new.email
            )));
        }

        let user = User {
            id: self.user_ids.allocate(),
            username: new.username,
            email: new.email,
            full_name: new.full_name,
            bio: new.bio,
            avatar_url: new.avatar_url,
            website_url: new.website_url,
            is_active: new.is_active,
            is_admin: new.is_admin,
            created_at: new.created_at,
            updated_at: None,
        };

        tracing::debug!(user_id = user.id, username = %user.username, "Inserted user");
        cols.users.push(user.clone());
        Ok(user)
    }

    /// Insert a new category.
    ///
    /// The parent, if any, must already exist. Because a category can
    /// only reference an earlier insertion, parent chains cannot form
    /// a cycle.
    pub async fn insert_category(&self, new: NewCategory) -> AppResult<Category> {
        let mut cols = self.collections.write().await;

        if cols.categories.iter().any(|c| c.slug == new.slug) {
            return Err(AppError::Conflict(format!(
                "category slug already taken: {}",
                new.slug
            )));
        }
        if let Some(parent_id) = new.parent_category_id
            && !cols.categories.iter().any(|c| c.id == parent_id)
        {
            return Err(AppError::Validation(format!(
                "parent category does not exist: {parent_id}"
            )));
        }

        let category = Category {
            id: self.category_ids.allocate(),
            name: new.name,
            slug: new.slug,
            description: new.description,
            parent_category_id: new.parent_category_id,
            display_order: new.display_order,
            is_active: new.is_active,
            created_at: new.created_at,
            updated_at: None,
        };

        tracing::debug!(category_id = category.id, slug = %category.slug, "Inserted category");
        cols.categories.push(category.clone());
        Ok(category)
    }

    /// Insert a new tag.
    pub async fn insert_tag(&self, new: NewTag) -> AppResult<Tag> {
        let mut cols = self.collections.write().await;

        if cols.tags.iter().any(|t| t.slug == new.slug) {
            return Err(AppError::Conflict(format!(
                "tag slug already taken: {}",
                new.slug
            )));
        }

        let tag = Tag {
            id: self.tag_ids.allocate(),
            name: new.name,
            slug: new.slug,
            description: new.description,
            created_at: new.created_at,
        };

        tracing::debug!(tag_id = tag.id, slug = %tag.slug, "Inserted tag");
        cols.tags.push(tag.clone());
        Ok(tag)
    }

    /// Insert a new post.
    ///
    /// The author, the category (if set), and every referenced tag
    /// must already exist; the slug must be unused.
    pub async fn insert_post(&self, new: NewPost) -> AppResult<Post> {
        let mut cols = self.collections.write().await;

        if cols.posts.iter().any(|p| p.slug == new.slug) {
            return Err(AppError::Conflict(format!(
                "post slug already taken: {}",
                new.slug
            )));
        }
        if !cols.users.iter().any(|u| u.id == new.author_id) {
            return Err(AppError::Validation(format!(
                "author does not exist: {}",
                new.author_id
            )));
        }
        if let Some(category_id) = new.category_id
            && !cols.categories.iter().any(|c| c.id == category_id)
        {
            return Err(AppError::Validation(format!(
                "category does not exist: {category_id}"
            )));
        }
        for tag_id in &new.tag_ids {
            if !cols.tags.iter().any(|t| t.id == *tag_id) {
                return Err(AppError::Validation(format!(
                    "tag does not exist: {tag_id}"
                )));
            }
        }
        if new.view_count < 0 {
            return Err(AppError::Validation(
                "view count must be non-negative".to_string(),
            ));
        }

        let post = Post {
            id: self.post_ids.allocate(),
            title: new.title,
            slug: new.slug,
            excerpt: new.excerpt,
            content: new.content,
            author_id: new.author_id,
            category_id: new.category_id,
            tag_ids: new.tag_ids,
            post_type: new.post_type,
            status: new.status,
            is_featured: new.is_featured,
            is_comments_enabled: new.is_comments_enabled,
            view_count: new.view_count,
            reading_time_minutes: new.reading_time_minutes,
            published_at: new.published_at,
            created_at: new.created_at,
            updated_at: None,
        };

        tracing::debug!(post_id = post.id, slug = %post.slug, "Inserted post");
        cols.posts.push(post.clone());
        Ok(post)
    }

    /// Insert a new comment.
    ///
    /// The post must exist, a registered author must reference an
    /// existing user, and the parent (if any) must be a top-level
    /// comment on the same post. The depth limit is enforced here at
    /// the write path; the tree builder also drops any deeper nesting
    /// it encounters.
    pub async fn insert_comment(&self, new: NewComment) -> AppResult<Comment> {
        let mut cols = self.collections.write().await;

        if !cols.posts.iter().any(|p| p.id == new.post_id) {
            return Err(AppError::Validation(format!(
                "post does not exist: {}",
                new.post_id
            )));
        }
        if let CommentAuthor::Registered { user_id } = new.author
            && !cols.users.iter().any(|u| u.id == user_id)
        {
            return Err(AppError::Validation(format!(
                "comment author does not exist: {user_id}"
            )));
        }
        if let Some(parent_id) = new.parent_comment_id {
            let Some(parent) = cols.comments.iter().find(|c| c.id == parent_id) else {
                return Err(AppError::Validation(format!(
                    "parent comment does not exist: {parent_id}"
                )));
            };
            if parent.post_id != new.post_id {
                return Err(AppError::Validation(format!(
                    "parent comment {parent_id} belongs to a different post"
                )));
            }
            if !parent.is_top_level() {
                return Err(AppError::Validation(format!(
                    "parent comment {parent_id} is itself a reply"
                )));
            }
        }

        let comment = Comment {
            id: self.comment_ids.allocate(),
            post_id: new.post_id,
            author: new.author,
            parent_comment_id: new.parent_comment_id,
            content: new.content,
            status: new.status,
            is_author_reply: new.is_author_reply,
            created_at: new.created_at,
            updated_at: None,
        };

        tracing::debug!(
            comment_id = comment.id,
            post_id = comment.post_id,
            "Inserted comment"
        );
        cols.comments.push(comment.clone());
        Ok(comment)
    }

    /// Change a comment's moderation status.
    pub async fn set_comment_status(
        &self,
        comment_id: i64,
        status: CommentStatus,
    ) -> AppResult<Comment> {
        let mut cols = self.collections.write().await;

        let comment = cols
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(AppError::CommentNotFound(comment_id))?;

        comment.status = status;
        comment.updated_at = Some(Utc::now());

        tracing::debug!(comment_id, ?status, "Updated comment status");
        Ok(comment.clone())
    }

    /// Increment a post's view counter, returning the new count.
    pub async fn increment_post_view_count(&self, post_id: i64) -> AppResult<i64> {
        let mut cols = self.collections.write().await;

        let post = cols
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(AppError::PostNotFound(post_id))?;

        post.view_count += 1;
        Ok(post.view_count)
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}
