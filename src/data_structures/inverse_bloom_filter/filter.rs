// Copyright (c) 2025 Inverse Bloom Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the Inverse Bloom Filter.

use std::fmt;

use crate::data_structures::inverse_bloom_filter::config::{table_len, InverseBloomFilterConfig};
use crate::data_structures::inverse_bloom_filter::error::{InverseBloomFilterError, Result};
use crate::data_structures::inverse_bloom_filter::hash::slot_index;
use crate::data_structures::inverse_bloom_filter::slot::Slot;

/// A concurrent filter that may report false negatives but never false positives.
///
/// The filter behaves like a fixed-size hash map that does not resolve
/// collisions: every key is routed to exactly one slot, and observing a key
/// replaces whatever that slot held. A key is reported as seen only if the
/// slot still held a byte-identical copy of it.
///
/// All operations take `&self`; share the filter between threads with `Arc`.
///
/// # Examples
///
/// ```
/// use inverse_bloom::data_structures::inverse_bloom_filter::InverseBloomFilter;
///
/// let filter = InverseBloomFilter::new(10).unwrap();
/// assert_eq!(filter.size(), 16);
///
/// assert!(!filter.observe(b"alpha"));
/// assert!(filter.observe(b"alpha"));
/// assert!(!filter.observe(b"beta"));
/// ```
pub struct InverseBloomFilter {
    /// One slot per index; length is a power of two
    table: Box<[Slot]>,

    /// `table.len() - 1`
    index_mask: u32,
}

impl InverseBloomFilter {
    /// Create a filter with at least `size` slots.
    ///
    /// The table length is `size` rounded up to the next power of two.
    ///
    /// # Errors
    ///
    /// * [`InverseBloomFilterError::SizeTooSmall`] if `size <= 0`
    /// * [`InverseBloomFilterError::SizeTooLarge`] if `size > MAX_SIZE`
    pub fn new(size: i64) -> Result<Self> {
        let len = match table_len(size) {
            Ok(len) => len,
            Err(err) => {
                tracing::debug!(requested = size, error = %err, "rejected inverse bloom filter size");
                return Err(err);
            }
        };

        let table = (0..len).map(|_| Slot::new()).collect::<Box<[_]>>();
        tracing::debug!(requested = size, slots = len, "created inverse bloom filter");

        Ok(Self {
            table,
            index_mask: (len - 1) as u32,
        })
    }

    /// Create a filter from a configuration.
    pub fn with_config(config: &InverseBloomFilterConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    /// Mark `key` as observed.
    ///
    /// Returns `true` if the key's slot held this exact key immediately
    /// before the call, and `false` otherwise. A `false` may be a false
    /// negative (another key evicted this one since it was last observed);
    /// a `true` is never a false positive.
    ///
    /// The slot holds `key` after every call, whatever the result.
    pub fn observe(&self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        let previous = self.table[self.index_of(key)].get_and_set(key);
        previous.is_some_and(|previous| previous.as_slice() == key)
    }

    /// Returns the table length, always a power of two.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// The slot index `key` maps to.
    ///
    /// Depends only on the key bytes and the table length.
    pub fn index_of(&self, key: impl AsRef<[u8]>) -> usize {
        slot_index(key.as_ref(), self.index_mask)
    }
}

impl TryFrom<&InverseBloomFilterConfig> for InverseBloomFilter {
    type Error = InverseBloomFilterError;

    fn try_from(config: &InverseBloomFilterConfig) -> Result<Self> {
        Self::with_config(config)
    }
}

impl fmt::Debug for InverseBloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InverseBloomFilter")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}
