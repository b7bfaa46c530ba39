//! Test utilities for code that builds documents.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::cell::Cell;

use crate::IdGenerator;

/// Deterministic generator yielding `prefix-1`, `prefix-2`, ...
///
/// Not thread-safe; each builder under test should own its own instance.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.get() - 1
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new("id");
        assert_eq!(ids.generate(), "id-1");
        assert_eq!(ids.generate(), "id-2");
        assert_eq!(ids.issued(), 2);
    }
}
