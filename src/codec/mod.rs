//! Dictionary text codec.
//!
//! Words are replaced by base-92 references into an ordered word list, case
//! is moved into a separate run-length stream, and the result is plain
//! printable text.
//!
//! # Layers
//!
//! | Module         | Role                                                  |
//! |----------------|-------------------------------------------------------|
//! | [`digits`]     | base-92 numbers over 92 printable characters          |
//! | [`escape`]     | `\` / `;` escaping and delimiter-aware splitting      |
//! | [`caps`]       | run-length capitalization stream and its cursor       |
//! | [`dictionary`] | ordered word list with exact and longest-prefix match |
//! | [`word`]       | one word <-> one token                                |
//! | [`document`]   | lines, tokens and the `\UPR` envelope                 |
//! | [`bytes`]      | base-92 for arbitrary bytes, bit packing              |
//!
//! # Reserved characters
//!
//! ```text
//! *   literal word follows
//! +   index / suffix separator
//! ;   token delimiter, uppercase flag in the capitalization stream
//! \   escape prefix inside a compressed line
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use ctff::codec::{Dictionary, DocumentCodec};
//!
//! let dictionary = Dictionary::from_words(["the", "cat"], "inline")?;
//! let codec = DocumentCodec::new(&dictionary);
//!
//! let compressed = codec.compress("The CAT\n");
//! assert_eq!(compressed.data, " ;!\n\\UPR\n;\";;;");
//!
//! let restored = codec.decompress(&compressed.data);
//! assert_eq!(restored.text, "The CAT\n");
//! ```

pub mod bytes;
pub mod caps;
pub mod dictionary;
pub mod digits;
pub mod document;
pub mod escape;
mod result;
pub mod word;

pub use bytes::{decode_bytes, encode_bytes, pack_bits, unpack_bits};
pub use caps::{format_caps, parse_caps, CapsCursor, CapsRuns};
pub use dictionary::Dictionary;
pub use document::{DocumentCodec, CAPS_MARKER};
pub use escape::{escape, split_escaped, unescape};
pub use result::{CompressionResult, DecompressionResult};
pub use word::{Token, WordCodec, INVALID_INDEX};

/// Check if content looks like a compressed document
pub fn is_ctff_format(content: &str) -> bool {
    content
        .split_terminator('\n')
        .any(|line| line == CAPS_MARKER)
}
