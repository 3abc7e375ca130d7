//! Error types for the pinyin-fts library.
//!
//! Compiling a query never fails; errors only come from the layers around the
//! compiler (configuration files, predicate construction, CLI input). All of them
//! are represented by [`PinyinFtsError`].
//!
//! # Examples
//!
//! ```
//! use pinyin_fts::error::{PinyinFtsError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PinyinFtsError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for pinyin-fts operations.
#[derive(Error, Debug)]
pub enum PinyinFtsError {
    /// I/O errors (config files, batch input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query-related errors (predicate construction, rendering)
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with PinyinFtsError.
pub type Result<T> = std::result::Result<T, PinyinFtsError>;

impl PinyinFtsError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PinyinFtsError::Config(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        PinyinFtsError::Query(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PinyinFtsError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PinyinFtsError::config("bad sentinel");
        assert_eq!(error.to_string(), "Configuration error: bad sentinel");

        let error = PinyinFtsError::query("no columns");
        assert_eq!(error.to_string(), "Query error: no columns");

        let error = PinyinFtsError::invalid_argument("empty column");
        assert_eq!(error.to_string(), "Invalid argument: empty column");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PinyinFtsError::from(io_error);

        match error {
            PinyinFtsError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
