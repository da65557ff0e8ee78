//! Data structures for stream deduplication.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Lock-free concurrency patterns
//! - Fixed, predictable memory footprint

pub mod inverse_bloom_filter;

// Re-export common data structures
pub use inverse_bloom_filter::{
    InverseBloomFilter, InverseBloomFilterConfig, InverseBloomFilterError, MAX_SIZE,
};
