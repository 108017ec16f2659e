//! Entity models for the collection store.

pub mod category;
pub mod comment;
pub mod post;
pub mod tag;
pub mod user;

pub use category::{Category, NewCategory};
pub use comment::{Comment, CommentAuthor, CommentStatus, NewComment};
pub use post::{NewPost, Post, PostStatus, PostType};
pub use tag::{NewTag, Tag};
pub use user::{NewUser, User};
