//! Repositories over the collection store.
//!
//! Each repository holds an `Arc` handle to the [`CollectionStore`]
//! and exposes the read/write operations for one collection. Query
//! methods clone snapshots out of the store and never mutate it.
//!
//! [`CollectionStore`]: crate::CollectionStore

pub mod category;
pub mod comment;
pub mod post;
pub mod tag;
pub mod user;

pub use category::{CategoryRepository, CategoryWithCount};
pub use comment::CommentRepository;
pub use post::{PostFilter, PostRepository};
pub use tag::{TagRepository, TagWithCount};
pub use user::UserRepository;

use serde::Serialize;

/// A page request for list endpoints. Both fields are 1-based and must
/// be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Create a page request.
    #[must_use]
    pub const fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageRequest {
    /// The first page with the standard page size of 10.
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// A filtered, sorted, paginated result set with total-count metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// The requested slice of the result set.
    pub data: Vec<T>,
    /// Matching records before pagination.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total / page_size)`.
    pub total_pages: usize,
}
