// Copyright (c) 2025 Inverse Bloom Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Inverse Bloom Filter for stream deduplication.
//!
//! A concurrent, fixed-size probabilistic filter that behaves as the
//! opposite of a classical Bloom filter: it may report a false negative but
//! never a false positive. It may say a key has not been seen when it has,
//! but it will never say a key has been seen when it has not.
//!
//! # Features
//!
//! - Thread-safe, lock-free observe operation with per-slot atomicity.
//! - Fixed capacity chosen at construction (rounded up to a power of two).
//! - Deterministic slot placement via FNV-1a 32 and a fixed digest fold.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use inverse_bloom::data_structures::inverse_bloom_filter::{InverseBloomFilter, InverseBloomFilterError};
//!
//! let filter = InverseBloomFilter::new(1024).unwrap();
//!
//! // First sighting
//! assert!(!filter.observe(b"event-42"));
//!
//! // Immediate repeat
//! assert!(filter.observe(b"event-42"));
//!
//! // Sizes outside (0, MAX_SIZE] are rejected
//! assert_eq!(InverseBloomFilter::new(0).unwrap_err(), InverseBloomFilterError::SizeTooSmall);
//! ```
//!
//! # Deduplication
//!
//! Every slot holds the most recent key routed to it. Duplicates that arrive
//! close together are caught; a duplicate separated from its original by a
//! colliding key slips through. Size the filter for the window of events in
//! which duplicates are expected.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use inverse_bloom::data_structures::inverse_bloom_filter::InverseBloomFilter;
//!
//! let filter = Arc::new(InverseBloomFilter::new(4096).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             let key = format!("worker-{worker}");
//!             filter.observe(&key);
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```

// Module declarations
mod config;
mod error;
mod filter;
mod hash;
mod slot;

// Re-exports
pub use config::{InverseBloomFilterConfig, MAX_SIZE};
pub use error::{InverseBloomFilterError, Result};
pub use filter::InverseBloomFilter;
