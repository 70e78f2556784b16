//! Error types for the coursefind library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`CoursefindError`] enum. Convenience constructors are provided for
//! the string-carrying variants.
//!
//! # Examples
//!
//! ```
//! use coursefind::error::{CoursefindError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CoursefindError::catalog("course id is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for coursefind operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum CoursefindError {
    /// I/O errors (catalog file reading).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog-related errors (malformed or inconsistent course data).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Analysis-related errors (query term processing).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CoursefindError.
pub type Result<T> = std::result::Result<T, CoursefindError>;

impl CoursefindError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        CoursefindError::Catalog(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CoursefindError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        CoursefindError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CoursefindError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CoursefindError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
