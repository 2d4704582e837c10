//! Error types for the Diarist library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`DiaristError`] enum.
//!
//! # Examples
//!
//! ```
//! use diarist::error::{DiaristError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DiaristError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Diarist operations.
#[derive(Error, Debug)]
pub enum DiaristError {
    /// I/O errors (reading journals, resources, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An external linguistic resource (stopword list, lemma dictionary) is unavailable
    #[error("Resource error: {0}")]
    Resource(String),

    /// A table column is missing or holds a value of the wrong type
    #[error("Column error: {0}")]
    Column(String),

    /// Malformed input (JSONL line, date, config, dictionary entry)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with DiaristError.
pub type Result<T> = std::result::Result<T, DiaristError>;

impl DiaristError {
    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        DiaristError::Resource(msg.into())
    }

    /// Create a new column error.
    pub fn column<S: Into<String>>(msg: S) -> Self {
        DiaristError::Column(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        DiaristError::Parse(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DiaristError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DiaristError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = DiaristError::column("missing column 'date'");
        assert_eq!(error.to_string(), "Column error: missing column 'date'");

        let error = DiaristError::resource("stopword list unavailable");
        assert_eq!(error.to_string(), "Resource error: stopword list unavailable");

        let error = DiaristError::parse("bad date");
        assert_eq!(error.to_string(), "Parse error: bad date");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = DiaristError::from(io_error);

        match error {
            DiaristError::Io(_) => {} // Expected
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = DiaristError::from(json_error);

        assert!(matches!(error, DiaristError::Json(_)));
    }
}
