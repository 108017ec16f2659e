//! Comment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment moderation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Awaiting moderation; not shown to readers.
    Pending,
    /// Visible to readers.
    Approved,
    /// Flagged as spam.
    Spam,
    /// Removed by a moderator. Terminal state; the record stays in
    /// the store.
    Deleted,
}

/// Who wrote a comment.
///
/// Registered and anonymous authorship are mutually exclusive, so the
/// two shapes are a tagged variant rather than independently optional
/// fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum CommentAuthor {
    /// A signed-in user.
    Registered { user_id: i64 },
    /// A visitor identified only by name and email.
    Anonymous { name: String, email: String },
}

/// A comment on a post. Nesting is at most two levels deep: top-level
/// comments and direct replies to them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,

    /// The post this comment belongs to.
    pub post_id: i64,

    pub author: CommentAuthor,

    /// Parent comment ID for replies; always references a top-level
    /// comment on the same post.
    pub parent_comment_id: Option<i64>,

    pub content: String,

    pub status: CommentStatus,

    /// Whether the post's author wrote this comment.
    pub is_author_reply: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert shape for a comment; the store assigns the ID.
#[derive(Clone, Debug)]
pub struct NewComment {
    pub post_id: i64,
    pub author: CommentAuthor,
    pub parent_comment_id: Option<i64>,
    pub content: String,
    pub status: CommentStatus,
    pub is_author_reply: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Whether this comment starts a thread (has no parent).
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent_comment_id.is_none()
    }
}
