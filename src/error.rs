//! Error types for the Polarity library.
//!
//! All errors are represented by the [`PolarityError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use polarity::error::{PolarityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PolarityError::corpus_not_found("movie_reviews"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Polarity operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum PolarityError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Training corpus directory is missing or contains no files
    #[error("Corpus not found: {0}")]
    CorpusNotFound(String),

    /// Stop word list could not be read
    #[error("Stop list error: {0}")]
    StopwordLoad(String),

    /// A persisted model cache exists but cannot be decoded
    #[error("Cache error: {0}")]
    CacheCorrupt(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Model serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PolarityError.
pub type Result<T> = std::result::Result<T, PolarityError>;

impl PolarityError {
    /// Create a new corpus-not-found error.
    pub fn corpus_not_found<S: Into<String>>(msg: S) -> Self {
        PolarityError::CorpusNotFound(msg.into())
    }

    /// Create a new stop-list load error.
    pub fn stopword_load<S: Into<String>>(msg: S) -> Self {
        PolarityError::StopwordLoad(msg.into())
    }

    /// Create a new cache-corrupt error.
    pub fn cache_corrupt<S: Into<String>>(msg: S) -> Self {
        PolarityError::CacheCorrupt(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PolarityError::Analysis(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        PolarityError::Serialization(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PolarityError::InvalidOperation(msg.into())
    }
}
