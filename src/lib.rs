//! # CTFF - Compressed Text File Format
//!
//! Reversible dictionary text codec. Words become short references into an
//! ordered word list, capitalization is stripped into a separate run-length
//! stream, and the result stays printable ASCII.
//!
//! ## Format Overview
//!
//! ```text
//! plain:       The CAT sat
//!
//! dictionary:  0 the   1 cat   2 sa
//!
//! compressed:   ;!;"+t          <- tokens joined by ';'
//!              \UPR             <- capitalization marker
//!              ;";;;#           <- T, run of 2, C, A, T, run of 3
//! ```
//!
//! ### Tokens
//!
//! | Token   | Wire form          | Meaning                         |
//! |---------|--------------------|---------------------------------|
//! | Exact   | `<index>`          | dictionary word                 |
//! | Prefix  | `<index>+<suffix>` | longest dictionary prefix + tail |
//! | Literal | `*<word>`          | no dictionary match             |
//!
//! Indices and capitalization run lengths are base-92 numbers over the
//! printable ASCII characters minus `*`, `+` and `;`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ctff::{Dictionary, DocumentCodec};
//!
//! let dictionary = Dictionary::load("dict/english.txt")?;
//! let codec = DocumentCodec::new(&dictionary);
//!
//! let compressed = codec.compress("The CAT sat\n");
//! let restored = codec.decompress(&compressed.data);
//! assert_eq!(restored.text, "The CAT sat\n");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: digit, escape, capitalization, word and document codecs
//! - [`files`]: file naming, dictionary lookup and whole-file transforms
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod codec;
pub mod config;
pub mod error;
pub mod files;

// Re-exports for convenience
pub use codec::{
    CompressionResult, DecompressionResult, Dictionary, DocumentCodec, Token, WordCodec,
    INVALID_INDEX,
};
pub use config::Config;
pub use error::{CtffError, Result};
pub use files::{compress_file, decompress_file, Mode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if content is in compressed format
pub fn is_ctff_format(content: &str) -> bool {
    codec::is_ctff_format(content)
}
