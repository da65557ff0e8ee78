//! Error module for the deduplication tool.
//!
//! Library-level failures (filter construction, configuration) are wrapped
//! into a single [`DedupError`] so the binary can propagate them with `?`.

use thiserror::Error;

use crate::data_structures::InverseBloomFilterError;

pub mod config;

/// Result type alias used throughout the deduplication tool.
pub type DedupResult<T> = Result<T, DedupError>;

/// Core error enum for the deduplication tool.
#[derive(Error, Debug)]
pub enum DedupError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The filter could not be constructed.
    #[error("Filter error: {0}")]
    Filter(#[from] InverseBloomFilterError),

    /// IO errors while reading records or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
