//! Error types for the Lexico library.
//!
//! All fallible operations return [`LexicoError`] through the [`Result`] alias.
//! Failures happen only while reading or writing resources; classifying a
//! lexeme never fails.
//!
//! # Examples
//!
//! ```
//! use lexico::error::{LexicoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexicoError::config("delimiter must be a single ASCII character"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// The main error type for Lexico operations.
#[derive(Error, Debug)]
pub enum LexicoError {
    /// A dictionary or input resource is missing or unreadable.
    #[error("Cannot read resource '{}': {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A resource is not valid UTF-8.
    #[error("Resource '{}' is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// I/O errors on output sinks
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Analysis-related errors (invalid tokenizer patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A line of a token output file could not be parsed back.
    #[error("Malformed token line {line}: {message}")]
    OutputFormat { line: usize, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with LexicoError.
pub type Result<T> = std::result::Result<T, LexicoError>;

impl LexicoError {
    /// Create a resource error for the given path.
    pub fn resource<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        LexicoError::Resource {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an encoding error for the given path.
    pub fn encoding<P: AsRef<Path>>(path: P, source: FromUtf8Error) -> Self {
        LexicoError::Encoding {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexicoError::Analysis(msg.into())
    }

    /// Create a new output format error.
    pub fn output_format<S: Into<String>>(line: usize, msg: S) -> Self {
        LexicoError::OutputFormat {
            line,
            message: msg.into(),
        }
    }

    /// Create a new invalid config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexicoError::Config(msg.into())
    }

    /// Whether this error comes from loading one of the run's resources.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            LexicoError::Resource { .. } | LexicoError::Encoding { .. }
        )
    }
}
