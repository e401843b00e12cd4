//! CTFF error types.
//!
//! Errors fall into two groups:
//!
//! - **Structural**: the operation cannot start (missing dictionary, missing
//!   input, an input name with no extension to strip). These are returned as
//!   `Err` before any output is written.
//! - **Content**: anomalies inside a compressed document (an index outside the
//!   dictionary, a missing capitalization section). These never reach the
//!   caller as errors; decoding substitutes a visible marker or a default and
//!   keeps going.
//!
//! The digit-level variants (`InvalidDigit`, `Overflow`) are produced by the
//! low-level codecs and absorbed by the document layer.

use std::path::PathBuf;

use thiserror::Error;

/// CTFF errors.
#[derive(Error, Debug)]
pub enum CtffError {
    /// Dictionary file does not exist or cannot be opened.
    #[error("Dictionary file not found: {}", .0.display())]
    DictionaryNotFound(PathBuf),

    /// Dictionary holds no words.
    #[error("Dictionary is empty: {0}")]
    DictionaryEmpty(String),

    /// Input file does not exist or cannot be opened.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input file name has no extension to replace.
    #[error("Invalid file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    /// Character outside the base-92 alphabet.
    #[error("Invalid base-92 digit {ch:?} at position {position}")]
    InvalidDigit {
        /// Offending character.
        ch: char,
        /// Character offset in the encoded run.
        position: usize,
    },

    /// Decoded value does not fit the target integer type.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Input is not valid UTF-8.
    #[error("Invalid UTF-8 in {}: {source}", path.display())]
    Utf8 {
        /// File that failed to decode.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CTFF operations
pub type Result<T> = std::result::Result<T, CtffError>;

impl From<toml::de::Error> for CtffError {
    fn from(err: toml::de::Error) -> Self {
        CtffError::Config(format!("Failed to parse config: {err}"))
    }
}
