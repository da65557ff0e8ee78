// Copyright (c) 2025 Inverse Bloom Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ownership slots for the Inverse Bloom Filter table.
//!
//! Each slot is an atomically swappable, reference-counted handle to the
//! last key routed to it. Swapping installs a new handle and hands the old
//! one back to the caller; the old buffer is released when that handle
//! drops, so no reader can ever observe freed or half-written memory.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// A single table cell holding at most one key.
#[derive(Debug, Default)]
pub(crate) struct Slot {
    key: ArcSwapOption<Vec<u8>>,
}

impl Slot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            key: ArcSwapOption::empty(),
        }
    }

    /// Atomically replace the slot content with `key`, returning what was
    /// there before.
    ///
    /// All swaps on one slot form a total order, and every value a swap
    /// installs is returned by exactly one later swap (or is still held by
    /// the slot).
    pub fn get_and_set(&self, key: &[u8]) -> Option<Arc<Vec<u8>>> {
        self.key.swap(Some(Arc::new(key.to_vec())))
    }

    /// Snapshot of the current content without modifying it.
    #[cfg(test)]
    pub fn peek(&self) -> Option<Arc<Vec<u8>>> {
        self.key.load_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_empty() {
        let slot = Slot::new();
        assert!(slot.peek().is_none());
    }

    #[test]
    fn test_get_and_set_returns_previous() {
        let slot = Slot::new();
        assert!(slot.get_and_set(b"first").is_none());

        let previous = slot.get_and_set(b"second");
        assert_eq!(previous.as_deref().map(Vec::as_slice), Some(&b"first"[..]));
        assert_eq!(slot.peek().as_deref().map(Vec::as_slice), Some(&b"second"[..]));
    }

    #[test]
    fn test_empty_key_is_distinct_from_empty_slot() {
        let slot = Slot::new();
        assert!(slot.get_and_set(b"").is_none());

        let previous = slot.get_and_set(b"");
        assert_eq!(previous.as_deref().map(Vec::as_slice), Some(&b""[..]));
    }

    #[test]
    fn test_returned_handle_outlives_replacement() {
        let slot = Slot::new();
        slot.get_and_set(b"held");
        let held = slot.get_and_set(b"next");
        slot.get_and_set(b"third");

        // The evicted buffer stays valid for as long as the caller holds it.
        assert_eq!(held.as_deref().map(Vec::as_slice), Some(&b"held"[..]));
    }
}
