//! Comment repository.

use std::sync::Arc;

use quillpress_common::AppResult;

use crate::entities::{Comment, CommentStatus, NewComment};
use crate::store::CollectionStore;

/// Comment repository for store operations.
#[derive(Clone)]
pub struct CommentRepository {
    store: Arc<CollectionStore>,
}

impl CommentRepository {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(store: Arc<CollectionStore>) -> Self {
        Self { store }
    }

    /// Find a comment by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        let cols = self.store.read().await;
        Ok(cols.comments.iter().find(|c| c.id == id).cloned())
    }

    /// Get the approved comments on a post, in store order.
    pub async fn find_approved_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        let cols = self.store.read().await;
        Ok(cols
            .comments
            .iter()
            .filter(|c| c.post_id == post_id && c.status == CommentStatus::Approved)
            .cloned()
            .collect())
    }

    /// Insert a new comment. Referential checks happen in the store.
    pub async fn create(&self, new: NewComment) -> AppResult<Comment> {
        self.store.insert_comment(new).await
    }

    /// Change a comment's moderation status.
    pub async fn set_status(&self, id: i64, status: CommentStatus) -> AppResult<Comment> {
        self.store.set_comment_status(id, status).await
    }
}
