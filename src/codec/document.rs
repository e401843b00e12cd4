//! Document envelope.
//!
//! ```text
//! <compressed line 1>\n
//! ...
//! <compressed line N>\n
//! \UPR\n
//! <capitalization stream>
//! ```
//!
//! Each compressed line holds the tokens of the space-separated words of one
//! input line, escaped and joined with `;`. Words are lowercased before
//! encoding; the case of every ASCII letter is carried by the capitalization
//! stream instead, in reading order across the whole document.

use super::caps::{collect_caps, format_caps, parse_caps, CapsCursor};
use super::dictionary::Dictionary;
use super::escape::{join_escaped, split_escaped};
use super::result::{CompressionResult, DecompressionResult};
use super::word::{Token, WordCodec, INVALID_INDEX};

/// Line introducing the capitalization stream
pub const CAPS_MARKER: &str = "\\UPR";

/// Separator between words of a plain line
pub const WORD_SEPARATOR: char = ' ';

#[derive(Debug, Default)]
struct TokenCounts {
    exact: usize,
    prefix: usize,
    literal: usize,
}

impl TokenCounts {
    fn record(&mut self, token: &Token) {
        match token {
            Token::Exact { .. } => self.exact += 1,
            Token::Prefix { .. } => self.prefix += 1,
            Token::Literal(_) => self.literal += 1,
        }
    }
}

/// Whole-document compressor and decompressor
#[derive(Debug, Clone, Copy)]
pub struct DocumentCodec<'d> {
    words: WordCodec<'d>,
}

impl<'d> DocumentCodec<'d> {
    /// Create a codec over `dictionary`
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            words: WordCodec::new(dictionary),
        }
    }

    /// Enable or disable the second unescape of expanded tokens
    pub fn with_unescape_expansions(mut self, enabled: bool) -> Self {
        self.words = self.words.with_unescape_expansions(enabled);
        self
    }

    /// Word codec in use
    pub fn words(&self) -> &WordCodec<'d> {
        &self.words
    }

    /// Compress a whole document
    pub fn compress(&self, text: &str) -> CompressionResult {
        let mut data = String::with_capacity(text.len());
        let mut caps = Vec::new();
        let mut counts = TokenCounts::default();
        let mut lines = 0;

        for line in text.split_terminator('\n') {
            collect_caps(line, &mut caps);
            data.push_str(&self.encode_line(line, &mut counts));
            data.push('\n');
            lines += 1;
        }

        data.push_str(CAPS_MARKER);
        data.push('\n');
        data.push_str(&format_caps(&caps));

        tracing::debug!(
            "Compressed {lines} lines: {} exact, {} prefix, {} literal, {} letters",
            counts.exact,
            counts.prefix,
            counts.literal,
            caps.len()
        );
        if counts.literal > 0 {
            tracing::info!("{} words not covered by the dictionary", counts.literal);
        }

        CompressionResult {
            original_bytes: text.len(),
            compressed_bytes: data.len(),
            data,
            lines,
            exact_words: counts.exact,
            prefix_words: counts.prefix,
            literal_words: counts.literal,
            letters: caps.len(),
        }
    }

    /// Compress one line, without its capitalization
    pub fn compress_line(&self, line: &str) -> String {
        self.encode_line(line, &mut TokenCounts::default())
    }

    fn encode_line(&self, line: &str, counts: &mut TokenCounts) -> String {
        let tokens: Vec<String> = line
            .split(WORD_SEPARATOR)
            .map(|word| {
                let token = self.words.encode(&word.to_ascii_lowercase());
                counts.record(&token);
                token.to_string()
            })
            .collect();
        join_escaped(&tokens)
    }

    /// Decompress a whole document.
    ///
    /// Never fails: a missing or unreadable capitalization section leaves the
    /// text lowercase, and unusable tokens become [`INVALID_INDEX`].
    pub fn decompress(&self, data: &str) -> DecompressionResult {
        let mut body = Vec::new();
        let mut caps_line = None;

        let mut lines = data.split_terminator('\n');
        while let Some(line) = lines.next() {
            if line == CAPS_MARKER {
                caps_line = Some(lines.next().unwrap_or(""));
                break;
            }
            body.push(line);
        }

        let caps = match caps_line.map(parse_caps) {
            Some(Ok(caps)) => Some(caps),
            Some(Err(e)) => {
                tracing::warn!("Unreadable capitalization section ({e}); output will be lowercase");
                None
            },
            None => {
                tracing::warn!("No {CAPS_MARKER} section found; output will be lowercase");
                None
            },
        };
        let caps_section_found = caps.is_some();
        let caps = caps.unwrap_or_default();

        let mut cursor = caps.cursor();
        let mut text = String::with_capacity(data.len() * 2);
        let mut invalid_tokens = 0;

        for line in &body {
            let (decoded, invalid) = self.decode_line(line, &mut cursor);
            text.push_str(&decoded);
            text.push('\n');
            invalid_tokens += invalid;
        }

        if invalid_tokens > 0 {
            tracing::warn!("{invalid_tokens} tokens decoded as {INVALID_INDEX}");
        }
        tracing::debug!(
            "Decompressed {} lines, {} of {} capitalization flags used",
            body.len(),
            cursor.position().min(caps.flag_count()),
            caps.flag_count()
        );

        DecompressionResult {
            text,
            lines: body.len(),
            caps_section_found,
            invalid_tokens,
            unused_flags: cursor.remaining(),
        }
    }

    /// Decompress one line, taking capitalization from `cursor`.
    ///
    /// Returns the restored line and the number of invalid tokens in it.
    pub fn decode_line(&self, line: &str, cursor: &mut CapsCursor<'_>) -> (String, usize) {
        let mut invalid = 0;
        let words: Vec<String> = split_escaped(line)
            .iter()
            .map(|token| {
                let word = self.words.try_decode(token).unwrap_or_else(|| {
                    tracing::debug!("Invalid token {token:?}");
                    invalid += 1;
                    INVALID_INDEX.to_string()
                });
                cursor.apply(&word)
            })
            .collect();

        let mut joined = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                joined.push(WORD_SEPARATOR);
            }
            joined.push_str(word);
        }
        (joined, invalid)
    }
}
