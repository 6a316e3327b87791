//! Error types for the Wordscope library.
//!
//! All errors are represented by the [`WordscopeError`] enum. The run-level
//! kinds (configuration, input, output) abort the stage they occur in; the
//! library itself never retries.
//!
//! # Examples
//!
//! ```
//! use wordscope::error::{Result, WordscopeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordscopeError::config_load("maximum.token.size is not a number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for Wordscope operations.
#[derive(Error, Debug)]
pub enum WordscopeError {
    /// Missing, unreadable or malformed configuration
    #[error("Configuration error: {0}")]
    ConfigLoad(String),

    /// The document or keyword list does not exist
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// I/O failure while reading an input
    #[error("Input read error: {0}")]
    InputRead(String),

    /// A report sink failed to persist a report
    #[error("Output write error: {0}")]
    OutputWrite(String),

    /// Analysis-related errors (tokenizer construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordscopeError.
pub type Result<T> = std::result::Result<T, WordscopeError>;

impl WordscopeError {
    /// Create a new configuration error.
    pub fn config_load<S: Into<String>>(msg: S) -> Self {
        WordscopeError::ConfigLoad(msg.into())
    }

    /// Create a new input-not-found error.
    pub fn input_not_found<P: AsRef<Path>>(path: P) -> Self {
        WordscopeError::InputNotFound(path.as_ref().to_path_buf())
    }

    /// Create a new input read error.
    pub fn input_read<S: Into<String>>(msg: S) -> Self {
        WordscopeError::InputRead(msg.into())
    }

    /// Create a new output write error.
    pub fn output_write<S: Into<String>>(msg: S) -> Self {
        WordscopeError::OutputWrite(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordscopeError::Analysis(msg.into())
    }

    /// Map a failure to open `path` for reading.
    ///
    /// `NotFound` becomes [`WordscopeError::InputNotFound`]; anything else is
    /// an [`WordscopeError::InputRead`].
    pub fn from_open<P: AsRef<Path>>(path: P, error: io::Error) -> Self {
        let path = path.as_ref();
        match error.kind() {
            io::ErrorKind::NotFound => Self::input_not_found(path),
            _ => Self::input_read(format!("{}: {error}", path.display())),
        }
    }
}
