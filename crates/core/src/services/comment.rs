//! Comment service: tree assembly, creation, and moderation.

use chrono::Utc;
use quillpress_common::{AppError, AppResult};
use quillpress_store::entities::{Comment, CommentAuthor, CommentStatus, NewComment};
use quillpress_store::repositories::{CommentRepository, PostRepository};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail};

/// A top-level comment with its direct replies, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    #[serde(flatten)]
    pub comment: Comment,
    /// Direct replies in insertion order.
    pub replies: Vec<Comment>,
}

/// Input for creating a new comment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    /// The post to comment on.
    pub post_id: i64,

    /// Top-level comment to reply to, if any.
    pub parent_comment_id: Option<i64>,

    /// Registered or anonymous authorship.
    pub author: CommentAuthor,

    #[validate(length(max = 8192))]
    pub content: String,
}

/// Comment service for business logic.
#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
    post_repo: PostRepository,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub const fn new(comment_repo: CommentRepository, post_repo: PostRepository) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }

    /// Get the approved comments on a post as a two-level tree.
    ///
    /// Top-level comments keep insertion order; each carries its
    /// direct replies, also in insertion order. A comment whose parent
    /// is itself a reply is dropped rather than re-attached.
    pub async fn for_post(&self, post_id: i64) -> AppResult<Vec<CommentThread>> {
        let comments = self.comment_repo.find_approved_by_post(post_id).await?;
        Ok(build_threads(comments))
    }

    /// Create a new comment. It starts out `Pending` and only becomes
    /// visible once a moderator approves it.
    pub async fn create(&self, input: CreateCommentInput) -> AppResult<Comment> {
        input.validate()?;

        let content = input.content.trim();
        if content.is_empty() {
            return Err(AppError::Validation(
                "comment content must not be empty".to_string(),
            ));
        }

        if let CommentAuthor::Anonymous { name, email } = &input.author {
            if name.trim().is_empty() {
                return Err(AppError::Validation(
                    "anonymous comments require an author name".to_string(),
                ));
            }
            if !email.validate_email() {
                return Err(AppError::Validation(format!(
                    "author email is not valid: {email}"
                )));
            }
        }

        let Some(post) = self.post_repo.find_by_id(input.post_id).await? else {
            return Err(AppError::Validation(format!(
                "post does not exist: {}",
                input.post_id
            )));
        };
        if !post.is_comments_enabled {
            return Err(AppError::Validation(format!(
                "comments are disabled for post {}",
                post.id
            )));
        }

        let comment = self
            .comment_repo
            .create(NewComment {
                post_id: input.post_id,
                author: input.author,
                parent_comment_id: input.parent_comment_id,
                content: content.to_string(),
                status: CommentStatus::Pending,
                is_author_reply: false,
                created_at: Utc::now(),
            })
            .await?;

        tracing::debug!(
            comment_id = comment.id,
            post_id = comment.post_id,
            "Created comment"
        );
        Ok(comment)
    }

    /// Approve a pending comment, making it visible to readers.
    pub async fn approve(&self, comment_id: i64) -> AppResult<Comment> {
        self.set_status(comment_id, CommentStatus::Approved).await
    }

    /// Flag a comment as spam.
    pub async fn mark_spam(&self, comment_id: i64) -> AppResult<Comment> {
        self.set_status(comment_id, CommentStatus::Spam).await
    }

    /// Soft-delete a comment. The record stays in the store.
    pub async fn delete(&self, comment_id: i64) -> AppResult<Comment> {
        self.set_status(comment_id, CommentStatus::Deleted).await
    }

    async fn set_status(&self, comment_id: i64, status: CommentStatus) -> AppResult<Comment> {
        let comment = self.comment_repo.set_status(comment_id, status).await?;
        tracing::debug!(comment_id, ?status, "Moderated comment");
        Ok(comment)
    }
}

/// Assemble a flat comment list into two-level threads.
///
/// Replies whose parent is not in the top-level set (because the
/// parent is itself a reply, or is not part of `comments`) are
/// silently dropped.
fn build_threads(comments: Vec<Comment>) -> Vec<CommentThread> {
    let (top_level, replies): (Vec<Comment>, Vec<Comment>) =
        comments.into_iter().partition(Comment::is_top_level);

    top_level
        .into_iter()
        .map(|comment| {
            let replies = replies
                .iter()
                .filter(|r| r.parent_comment_id == Some(comment.id))
                .cloned()
                .collect();
            CommentThread { comment, replies }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quillpress_store::{CollectionStore, seed};
    use std::sync::Arc;

    async fn service() -> CommentService {
        let store = Arc::new(CollectionStore::new());
        seed(&store).await.unwrap();
        CommentService::new(
            CommentRepository::new(store.clone()),
            PostRepository::new(store),
        )
    }

    fn anonymous(content: &str) -> CreateCommentInput {
        CreateCommentInput {
            post_id: 1,
            parent_comment_id: None,
            author: CommentAuthor::Anonymous {
                name: "Visitor".to_string(),
                email: "visitor@example.com".to_string(),
            },
            content: content.to_string(),
        }
    }

    fn test_comment(id: i64, parent: Option<i64>) -> Comment {
        Comment {
            id,
            post_id: 1,
            author: CommentAuthor::Anonymous {
                name: "Visitor".to_string(),
                email: "visitor@example.com".to_string(),
            },
            parent_comment_id: parent,
            content: format!("comment {id}"),
            status: CommentStatus::Approved,
            is_author_reply: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_build_threads_two_levels() {
        let threads = build_threads(vec![
            test_comment(1, None),
            test_comment(2, Some(1)),
            test_comment(3, None),
            test_comment(4, Some(1)),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].comment.id, 1);
        let reply_ids: Vec<i64> = threads[0].replies.iter().map(|r| r.id).collect();
        assert_eq!(reply_ids, vec![2, 4]);
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn test_build_threads_drops_replies_to_replies() {
        let threads = build_threads(vec![
            test_comment(1, None),
            test_comment(2, Some(1)),
            // Parent is itself a reply; dropped, not re-attached.
            test_comment(3, Some(2)),
        ]);

        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].replies.len(), 1);
        assert_eq!(threads[0].replies[0].id, 2);
    }

    #[tokio::test]
    async fn test_tree_contains_only_approved() {
        let service = service().await;
        let threads = service.for_post(1).await.unwrap();

        // Seeded post 1 has three approved comments (one top-level
        // with two replies), one pending, one spam.
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].replies.len(), 2);
        for thread in &threads {
            assert_eq!(thread.comment.status, CommentStatus::Approved);
            for reply in &thread.replies {
                assert_eq!(reply.parent_comment_id, Some(thread.comment.id));
            }
        }
    }

    #[tokio::test]
    async fn test_created_comment_hidden_until_approved() {
        let service = service().await;
        let before = service.for_post(1).await.unwrap().len();

        let created = service.create(anonymous("A thoughtful reply")).await.unwrap();
        assert_eq!(created.status, CommentStatus::Pending);
        assert_eq!(service.for_post(1).await.unwrap().len(), before);

        service.approve(created.id).await.unwrap();
        assert_eq!(service.for_post(1).await.unwrap().len(), before + 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_content() {
        let service = service().await;
        let err = service.create(anonymous("   ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_post() {
        let service = service().await;
        let mut input = anonymous("Hello");
        input.post_id = 999;
        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_bad_email() {
        let service = service().await;
        let mut input = anonymous("Hello");
        input.author = CommentAuthor::Anonymous {
            name: "Visitor".to_string(),
            email: "not-an-email".to_string(),
        };
        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_disabled_comments() {
        let service = service().await;
        let mut input = anonymous("Hello");
        // Seeded post 4 has comments disabled.
        input.post_id = 4;
        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_moderation_unknown_comment_fails() {
        let service = service().await;
        let err = service.approve(999).await.unwrap_err();
        assert!(matches!(err, AppError::CommentNotFound(999)));
    }
}
