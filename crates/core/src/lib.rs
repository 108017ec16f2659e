//! Core business logic for the Quillpress reading client.
//!
//! Services wrap the store repositories and add the rules the reading
//! surface relies on: moderation-aware comment threads, featured and
//! popular selections, and comment submission checks.

pub mod services;

pub use services::*;
