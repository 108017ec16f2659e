//! Business logic services.

pub mod category;
pub mod comment;
pub mod post;
pub mod tag;
pub mod user;

pub use category::CategoryService;
pub use comment::{CommentService, CommentThread, CreateCommentInput};
pub use post::{
    DEFAULT_FEATURED_LIMIT, DEFAULT_POPULAR_LIMIT, DEFAULT_RELATED_LIMIT, PostService,
};
pub use tag::{DEFAULT_POPULAR_TAG_LIMIT, TagService};
pub use user::UserService;
