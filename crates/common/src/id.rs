//! ID allocation utilities.

use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic integer ID allocator for a single collection.
///
/// IDs are positive, unique, and strictly increasing for the lifetime
/// of the allocator. When records with known IDs are loaded from an
/// existing dataset, call [`bump_past`](Self::bump_past) so later
/// allocations never collide with them.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicI64,
}

impl IdAllocator {
    /// Create a new allocator starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }

    /// Allocate the next ID.
    #[must_use]
    pub fn allocate(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Ensure future allocations land strictly after `id`.
    pub fn bump_past(&self, id: i64) {
        self.next.fetch_max(id + 1, Ordering::Relaxed);
    }

    /// The ID the next call to [`allocate`](Self::allocate) will return.
    #[must_use]
    pub fn peek(&self) -> i64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_is_monotonic() {
        let ids = IdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn test_bump_past_skips_seeded_ids() {
        let ids = IdAllocator::new();
        ids.bump_past(7);
        assert_eq!(ids.allocate(), 8);
    }

    #[test]
    fn test_bump_past_never_rewinds() {
        let ids = IdAllocator::new();
        ids.bump_past(10);
        ids.bump_past(3);
        assert_eq!(ids.allocate(), 11);
    }
}
