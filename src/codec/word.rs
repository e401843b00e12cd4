//! Word tokens.
//!
//! Each lowercased word becomes one token:
//!
//! | Token   | Wire form                 | When                                |
//! |---------|---------------------------|-------------------------------------|
//! | Exact   | `<index>`                 | word is a dictionary entry          |
//! | Prefix  | `<index>+<suffix>`        | an entry is a prefix of the word    |
//! | Literal | `*<word>`                 | nothing matches                     |
//!
//! `<index>` is base-92 (see [`super::digits`]), which never produces `*`,
//! `+` or `;`, so the first character and the first `+` are unambiguous.

use std::fmt;

use super::dictionary::Dictionary;
use super::digits::{decode_number, write_number};
use super::escape::unescape;

/// Marker for a word sent verbatim
pub const LITERAL_MARKER: char = '*';

/// Separator between an index and a literal suffix
pub const SUFFIX_SEPARATOR: char = '+';

/// Decoded in place of a token whose index is not in the dictionary
pub const INVALID_INDEX: &str = "INVALID_INDEX";

/// Encoded form of one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Word not covered by the dictionary
    Literal(String),
    /// Word equal to a dictionary entry
    Exact {
        /// Entry index
        index: usize,
    },
    /// Dictionary entry followed by a literal tail
    Prefix {
        /// Entry index
        index: usize,
        /// Remainder of the word after the entry
        suffix: String,
    },
}

impl Token {
    /// Parse a token as produced by [`WordCodec::encode`] (already unescaped).
    ///
    /// Returns `None` when the index part is not a valid base-92 number. An
    /// empty index part reads as entry 0. The empty string is an empty
    /// literal.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return Some(Token::Literal(String::new()));
        }
        if let Some(word) = raw.strip_prefix(LITERAL_MARKER) {
            return Some(Token::Literal(word.to_string()));
        }

        let (digits, suffix) = match raw.split_once(SUFFIX_SEPARATOR) {
            Some((digits, suffix)) => (digits, Some(suffix)),
            None => (raw, None),
        };
        let index = usize::try_from(decode_number(digits).ok()?).ok()?;

        Some(match suffix {
            Some(suffix) => Token::Prefix {
                index,
                suffix: suffix.to_string(),
            },
            None => Token::Exact { index },
        })
    }

    /// Dictionary index referenced by this token
    pub fn index(&self) -> Option<usize> {
        match self {
            Token::Literal(_) => None,
            Token::Exact { index } | Token::Prefix { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        match self {
            Token::Literal(word) => {
                out.push(LITERAL_MARKER);
                out.push_str(word);
            },
            Token::Exact { index } => write_number(&mut out, *index as u64),
            Token::Prefix { index, suffix } => {
                write_number(&mut out, *index as u64);
                if !suffix.is_empty() {
                    out.push(SUFFIX_SEPARATOR);
                    out.push_str(suffix);
                }
            },
        }
        f.write_str(&out)
    }
}

/// Word encoder/decoder over a borrowed dictionary
#[derive(Debug, Clone, Copy)]
pub struct WordCodec<'d> {
    dictionary: &'d Dictionary,
    /// Unescape `entry + suffix` after expansion.
    ///
    /// Line splitting already removes the escaping, so this second pass
    /// drops any `\` in a suffix. Off by default; only for reading files
    /// that depend on it.
    pub unescape_expansions: bool,
}

impl<'d> WordCodec<'d> {
    /// Create a codec over `dictionary`
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            unescape_expansions: false,
        }
    }

    /// Enable or disable the second unescape of expanded tokens
    pub fn with_unescape_expansions(mut self, enabled: bool) -> Self {
        self.unescape_expansions = enabled;
        self
    }

    /// Dictionary in use
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Encode a lowercased word
    pub fn encode(&self, word: &str) -> Token {
        if let Some(index) = self.dictionary.find_exact(word) {
            return Token::Exact { index };
        }

        match self.dictionary.find_longest_prefix(word) {
            Some(index) => {
                let prefix_len = self.dictionary.get(index).map_or(0, str::len);
                Token::Prefix {
                    index,
                    suffix: word[prefix_len..].to_string(),
                }
            },
            None => Token::Literal(word.to_string()),
        }
    }

    /// Decode one unescaped token.
    ///
    /// An index outside the dictionary, or an index part that is not valid
    /// base-92, decodes to [`INVALID_INDEX`].
    pub fn decode(&self, raw: &str) -> String {
        self.try_decode(raw).unwrap_or_else(|| {
            tracing::warn!(
                "Invalid token {raw:?} (dictionary has {} words)",
                self.dictionary.len()
            );
            INVALID_INDEX.to_string()
        })
    }

    /// Decode one unescaped token, or `None` if its index is unusable
    pub fn try_decode(&self, raw: &str) -> Option<String> {
        Token::parse(raw).and_then(|token| self.expand(&token))
    }

    /// Expand a parsed token back into its word.
    ///
    /// Returns `None` when the index is outside the dictionary.
    pub fn expand(&self, token: &Token) -> Option<String> {
        let (index, suffix) = match token {
            Token::Literal(word) => return Some(word.clone()),
            Token::Exact { index } => (*index, ""),
            Token::Prefix { index, suffix } => (*index, suffix.as_str()),
        };

        let entry = self.dictionary.get(index)?;
        let expanded = format!("{entry}{suffix}");
        if self.unescape_expansions {
            Some(unescape(&expanded))
        } else {
            Some(expanded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied(), "test").unwrap()
    }

    #[test]
    fn test_encode_exact() {
        let d = dict(&["the", "cat"]);
        let codec = WordCodec::new(&d);
        assert_eq!(codec.encode("the"), Token::Exact { index: 0 });
        assert_eq!(codec.encode("cat").to_string(), "!");
    }

    #[test]
    fn test_encode_longest_prefix() {
        let d = dict(&["a", "ab", "abc"]);
        let codec = WordCodec::new(&d);
        let token = codec.encode("abcd");
        assert_eq!(
            token,
            Token::Prefix {
                index: 2,
                suffix: "d".to_string()
            }
        );
        assert_eq!(token.to_string(), "\"+d");
        assert_eq!(codec.decode("\"+d"), "abcd");
    }

    #[test]
    fn test_encode_literal() {
        let d = dict(&["cat"]);
        let codec = WordCodec::new(&d);
        assert_eq!(codec.encode("dog").to_string(), "*dog");
        assert_eq!(codec.encode("").to_string(), "*");
        assert_eq!(codec.decode("*dog"), "dog");
        assert_eq!(codec.decode("*"), "");
        assert_eq!(codec.decode(""), "");
    }

    #[test]
    fn test_literal_keeps_markers() {
        let d = dict(&["cat"]);
        let codec = WordCodec::new(&d).with_unescape_expansions(true);
        // Literal payload is never unescaped a second time
        assert_eq!(codec.decode(r"**a+b\c"), r"*a+b\c");
    }

    #[test]
    fn test_invalid_index() {
        let d = dict(&["the", "cat"]);
        let codec = WordCodec::new(&d);
        assert_eq!(codec.decode("\""), INVALID_INDEX);
        assert_eq!(codec.decode("~~+s"), INVALID_INDEX);
        assert_eq!(codec.decode("\u{7f}"), INVALID_INDEX);
        assert_eq!(codec.try_decode("!"), Some("cat".to_string()));
        assert_eq!(codec.try_decode("\""), None);
    }

    #[test]
    fn test_empty_index_is_first_entry() {
        let d = dict(&["the", "cat"]);
        let codec = WordCodec::new(&d);
        assert_eq!(
            Token::parse("+s"),
            Some(Token::Prefix {
                index: 0,
                suffix: "s".to_string()
            })
        );
        assert_eq!(codec.decode("+s"), "thes");
        assert_eq!(codec.decode("+"), "the");
    }

    #[test]
    fn test_encode_long_word() {
        let d = dict(&["a", "b"]);
        let codec = WordCodec::new(&d);
        let word = "z".repeat(1 << 20);
        assert_eq!(codec.encode(&word), Token::Literal(word.clone()));

        let word = format!("a{word}");
        assert_eq!(codec.encode(&word).index(), Some(0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Token::parse("! "), Some(Token::Exact { index: 92 }));
        assert_eq!(
            Token::parse("!+a+b"),
            Some(Token::Prefix {
                index: 1,
                suffix: "a+b".to_string()
            })
        );
        assert_eq!(Token::parse("*"), Some(Token::Literal(String::new())));
        assert_eq!(Token::parse("!+a").and_then(|t| t.index()), Some(1));
    }

    #[test]
    fn test_backslash_index() {
        // Index 57 encodes as a single backslash
        let words: Vec<String> = (0..60).map(|i| format!("w{i}")).collect();
        let d = Dictionary::from_words(words, "test").unwrap();
        let codec = WordCodec::new(&d);
        let token = codec.encode("w57");
        assert_eq!(token.to_string(), "\\");
        assert_eq!(codec.decode("\\"), "w57");
    }

    #[test]
    fn test_unescape_expansions() {
        let d = dict(&["a"]);
        let plain = WordCodec::new(&d);
        let token = plain.encode(r"a\b").to_string();
        assert_eq!(token, r" +\b");
        assert_eq!(plain.decode(&token), r"a\b");

        let legacy = plain.with_unescape_expansions(true);
        assert_eq!(legacy.decode(&token), "ab");
    }
}
