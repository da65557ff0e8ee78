// Copyright (c) 2025 Inverse Bloom Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Inverse Bloom Filter.

/// Errors that can occur while constructing an Inverse Bloom Filter.
///
/// These are the only failures the filter can produce; once a filter exists,
/// observing keys and querying its size never fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum InverseBloomFilterError {
    /// The requested size was zero or negative
    #[error("Cannot have a zero or negative size")]
    SizeTooSmall,

    /// The requested size exceeds `MAX_SIZE`
    #[error("Size given too large to round to a power of 2")]
    SizeTooLarge,
}

/// Result type for Inverse Bloom Filter operations
pub type Result<T> = std::result::Result<T, InverseBloomFilterError>;
