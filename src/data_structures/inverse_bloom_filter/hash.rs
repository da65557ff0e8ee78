// Copyright (c) 2025 Inverse Bloom Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot index computation for the Inverse Bloom Filter.
//!
//! Keys are hashed with 32-bit FNV-1a and the big-endian digest is folded
//! into a small mixing value before being masked to the table length. The
//! fold is deliberately cheap and must stay bit-for-bit stable: filters in
//! different processes only agree on slot placement (and therefore on
//! false-negative behavior) if they fold the same way.

use std::hash::Hasher;

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// Streaming 32-bit FNV-1a hasher.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fnv1a32 {
    state: u32,
}

impl Default for Fnv1a32 {
    fn default() -> Self {
        Self {
            state: FNV32_OFFSET_BASIS,
        }
    }
}

impl Fnv1a32 {
    /// Create a new hasher at the FNV offset basis.
    pub fn new() -> Self {
        Self::default()
    }

    /// The 32-bit digest of everything written so far.
    pub fn finish32(&self) -> u32 {
        self.state
    }

    /// The digest as bytes, most significant first.
    pub fn digest(&self) -> [u8; 4] {
        self.finish32().to_be_bytes()
    }
}

impl Hasher for Fnv1a32 {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u32::from(byte);
            self.state = self.state.wrapping_mul(FNV32_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        u64::from(self.state)
    }
}

/// Fold the first three digest bytes into a mixing value.
///
/// `x = d[0]`, then `x = (x << 3) + d[i]` for `d[1]` and `d[2]`. The fourth
/// byte is discarded. The result is always below `2^15`.
pub(crate) fn fold_digest(digest: [u8; 4]) -> u32 {
    digest[1..3]
        .iter()
        .fold(u32::from(digest[0]), |x, &byte| (x << 3) + u32::from(byte))
}

/// Compute the slot index of `key` for a table with the given mask.
pub(crate) fn slot_index(key: &[u8], index_mask: u32) -> usize {
    let mut hasher = Fnv1a32::new();
    hasher.write(key);
    (fold_digest(hasher.digest()) & index_mask) as usize
}
