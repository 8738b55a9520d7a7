//! Identifier generation

use std::sync::atomic::{AtomicI64, Ordering};

/// Source of unique, never reused identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

/// Monotonic in-process counter starting at 1
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicI64,
}

impl SequenceIdGenerator {
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
