//! In-memory storage layer for quillpress.
//!
//! Holds the authoritative collections (posts, categories, tags,
//! comments, users) behind a [`CollectionStore`] and exposes them
//! through per-entity repositories. The store stands in for a real
//! persistent backend: swapping one in later only touches this crate,
//! not the query logic layered on top.

pub mod entities;
pub mod repositories;
pub mod seed;
pub mod store;

pub use seed::seed;
pub use store::{CollectionStore, Collections};
