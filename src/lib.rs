//! Inverse Bloom Filter Library
//!
//! This library provides a concurrent "inverse" Bloom filter: a fixed-size
//! probabilistic structure that may report a false negative but never a
//! false positive. It is intended for de-duplicating events in a stream
//! where duplicates tend to arrive close together.
//!
//! # Architecture
//!
//! - [`data_structures`]: the filter itself, usable on its own
//! - [`dedup`]: newline-delimited record deduplication over a shared filter
//! - [`config`] and [`error`]: the ambient layers used by the `ibf-dedup` binary

pub mod config;
pub mod data_structures;
pub mod dedup;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
