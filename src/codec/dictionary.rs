//! Word dictionary.
//!
//! An ordered list of words; a word's position is the index written into the
//! compressed stream. Lookups honour the first occurrence of a word, so a
//! dictionary with duplicates still encodes deterministically.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CtffError, Result};

/// Ordered, immutable word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    /// Word -> index of its first occurrence
    index: HashMap<String, usize>,
    /// Byte length of the longest entry
    max_len: usize,
}

impl Dictionary {
    /// Build a dictionary from words in index order.
    ///
    /// `source` names the dictionary in the error returned when `words` is
    /// empty.
    pub fn from_words<I, S>(words: I, source: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(CtffError::DictionaryEmpty(source.to_string()));
        }

        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            index.entry(word.clone()).or_insert(i);
        }
        let max_len = words.iter().map(String::len).max().unwrap_or(0);

        Ok(Self {
            words,
            index,
            max_len,
        })
    }

    /// Parse dictionary text: one word per line, in file order.
    ///
    /// A trailing `\r` is stripped from each line. Blank lines are kept so
    /// indices match line numbers.
    pub fn parse(text: &str, source: &str) -> Result<Self> {
        let words = text
            .split_terminator('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line));
        Self::from_words(words, source)
    }

    /// Load a dictionary file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CtffError::DictionaryNotFound(path.to_path_buf()),
            _ => CtffError::Io(e),
        })?;

        let dictionary = Self::parse(&text, &path.display().to_string())?;
        tracing::debug!(
            "Loaded dictionary {} ({} words)",
            path.display(),
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterate words in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Index of the first entry equal to `word`
    pub fn find_exact(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Index of the longest non-empty entry that is a prefix of `word`.
    ///
    /// Among equally long matches the first occurrence wins. This is the
    /// same answer as scanning the list and keeping a candidate only when it
    /// is strictly longer than the best so far. Only prefixes no longer than
    /// the longest entry are probed.
    pub fn find_longest_prefix(&self, word: &str) -> Option<usize> {
        (1..=word.len().min(self.max_len))
            .rev()
            .filter(|&len| word.is_char_boundary(len))
            .find_map(|len| self.find_exact(&word[..len]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied(), "test").unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        let err = Dictionary::from_words(Vec::<String>::new(), "english").unwrap_err();
        assert!(matches!(err, CtffError::DictionaryEmpty(name) if name == "english"));
        assert!(Dictionary::parse("", "x").is_err());
    }

    #[test]
    fn test_parse_lines() {
        let d = Dictionary::parse("the\r\ncat\n\ndog", "x").unwrap();
        assert_eq!(d.len(), 4);
        assert_eq!(d.get(0), Some("the"));
        assert_eq!(d.get(1), Some("cat"));
        assert_eq!(d.get(2), Some(""));
        assert_eq!(d.get(3), Some("dog"));
        assert_eq!(d.get(4), None);
    }

    #[test]
    fn test_find_exact_first_occurrence() {
        let d = dict(&["a", "b", "a"]);
        assert_eq!(d.find_exact("a"), Some(0));
        assert_eq!(d.find_exact("b"), Some(1));
        assert_eq!(d.find_exact("c"), None);
    }

    #[test]
    fn test_longest_prefix() {
        let d = dict(&["a", "ab", "abc"]);
        assert_eq!(d.find_longest_prefix("abcd"), Some(2));
        assert_eq!(d.find_longest_prefix("abx"), Some(1));
        assert_eq!(d.find_longest_prefix("b"), None);
        assert_eq!(d.find_longest_prefix(""), None);

        let d = dict(&["x", "ab", "q", "ab"]);
        assert_eq!(d.find_longest_prefix("abz"), Some(1));
    }

    #[test]
    fn test_longest_prefix_ignores_empty_entry() {
        let d = dict(&["", "z"]);
        assert_eq!(d.find_longest_prefix("abc"), None);
        assert_eq!(d.find_exact(""), Some(0));
    }

    #[test]
    fn test_longest_prefix_multibyte() {
        let d = dict(&["caf", "café"]);
        assert_eq!(d.find_longest_prefix("cafés"), Some(1));
        assert_eq!(d.find_longest_prefix("cafè"), Some(0));
    }

    #[test]
    fn test_longest_prefix_long_word() {
        let d = dict(&["a", "b", "zz"]);
        let word = "z".repeat(1 << 20);
        assert_eq!(d.find_longest_prefix(&word), Some(2));
        assert_eq!(d.find_longest_prefix(&"y".repeat(1 << 20)), None);

        let word = format!("é{}", "x".repeat(1 << 20));
        let d = dict(&["é", "éx"]);
        assert_eq!(d.find_longest_prefix(&word), Some(1));
    }

    #[test]
    fn test_load_missing() {
        let err = Dictionary::load("/nonexistent/ctff/english.txt").unwrap_err();
        assert!(matches!(err, CtffError::DictionaryNotFound(_)));
    }
}
