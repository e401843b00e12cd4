//! Results of document compression and decompression.

use serde::{Deserialize, Serialize};

/// Result of compressing a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionResult {
    /// Compressed document (body, marker, capitalization line)
    pub data: String,
    /// Original size in bytes
    pub original_bytes: usize,
    /// Compressed size in bytes
    pub compressed_bytes: usize,
    /// Number of lines
    pub lines: usize,
    /// Words encoded as a bare dictionary index
    pub exact_words: usize,
    /// Words encoded as a dictionary index plus suffix
    pub prefix_words: usize,
    /// Words sent verbatim
    pub literal_words: usize,
    /// Letters recorded in the capitalization stream
    pub letters: usize,
}

impl CompressionResult {
    /// Total words encoded
    pub fn words(&self) -> usize {
        self.exact_words + self.prefix_words + self.literal_words
    }

    /// Calculate byte compression ratio
    pub fn byte_ratio(&self) -> f64 {
        if self.compressed_bytes == 0 {
            0.0
        } else {
            self.original_bytes as f64 / self.compressed_bytes as f64
        }
    }

    /// Percentage of bytes saved (negative when the output grew)
    pub fn savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            (self.original_bytes as f64 - self.compressed_bytes as f64)
                / self.original_bytes as f64
                * 100.0
        }
    }

    /// Check if compression was beneficial
    pub fn is_beneficial(&self) -> bool {
        self.compressed_bytes < self.original_bytes
    }
}

/// Result of decompressing a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompressionResult {
    /// Restored text
    pub text: String,
    /// Number of lines
    pub lines: usize,
    /// Whether the `\UPR` capitalization section was present and readable
    pub caps_section_found: bool,
    /// Tokens that decoded to `INVALID_INDEX`
    pub invalid_tokens: usize,
    /// Capitalization flags left unused after the last letter
    pub unused_flags: u64,
}
