//! Test modules for the crate.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Property-based tests of the filter using proptest
//! - Shared fixtures and strategies

pub mod inverse_bloom_filter_tests;

pub use test_utils::{create_test_dir, key_strategy, small_size_strategy, valid_size_strategy, write_file};
