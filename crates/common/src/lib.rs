//! Common utilities and shared types for quillpress.
//!
//! This crate provides foundational components used across all
//! quillpress crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID allocation**: Monotonic integer identifiers via [`IdAllocator`]
//! - **Text helpers**: Slugs, truncation, and display formatting
//!
//! # Example
//!
//! ```
//! use quillpress_common::{AppResult, IdAllocator};
//!
//! fn example() -> AppResult<()> {
//!     let ids = IdAllocator::new();
//!     let id = ids.allocate();
//!     assert_eq!(id, 1);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod text;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdAllocator;
pub use text::{
    estimate_reading_time, format_reading_time, format_view_count, slugify, truncate,
};
