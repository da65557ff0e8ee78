// Copyright (c) 2025 Inverse Bloom Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Inverse Bloom Filter.

use serde::{Deserialize, Serialize};

use super::error::{InverseBloomFilterError, Result};

/// The largest capacity a filter may be constructed with.
pub const MAX_SIZE: i64 = 1 << 30;

/// Configuration for the Inverse Bloom Filter.
///
/// The only tunable is the requested capacity. The filter rounds it up to the
/// next power of two, so the table may end up larger than requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InverseBloomFilterConfig {
    /// Requested number of slots
    pub capacity: i64,
}

impl InverseBloomFilterConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - capacity: 65,536
    pub fn new() -> Self {
        Self { capacity: 1 << 16 }
    }

    /// Set the requested number of slots.
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the capacity without allocating anything.
    pub fn validate(&self) -> Result<()> {
        table_len(self.capacity).map(|_| ())
    }

    /// The table length a filter built from this configuration would have.
    pub fn table_len(&self) -> Result<usize> {
        table_len(self.capacity)
    }
}

impl Default for InverseBloomFilterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a requested capacity up to the actual table length.
pub(crate) fn table_len(size: i64) -> Result<usize> {
    if size > MAX_SIZE {
        return Err(InverseBloomFilterError::SizeTooLarge);
    }
    if size <= 0 {
        return Err(InverseBloomFilterError::SizeTooSmall);
    }
    Ok((size as u64).next_power_of_two() as usize)
}
