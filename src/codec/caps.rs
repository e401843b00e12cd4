//! Capitalization bitmap.
//!
//! Every ASCII letter of the original document contributes one flag, `true`
//! for uppercase, in reading order across all lines. The flags are written as
//! a run-length stream:
//!
//! ```text
//! <base-92 length of a run of lowercase letters> ';' per uppercase letter
//!
//! [T h e C A T]  ->  ;";;;      (true, run 2, true, true, true)
//! [a b C]        ->  ";          (run 2, true)
//! [a b]          ->  "           (trailing run 2, no ';')
//! ```
//!
//! A zero-length run before an uppercase letter writes nothing.

use super::digits::{decode_number, write_number};
use super::escape::DELIMITER;
use crate::error::Result;

/// Append one flag per ASCII letter in `text` to `caps`
pub fn collect_caps(text: &str, caps: &mut Vec<bool>) {
    caps.extend(
        text.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| ch.is_ascii_uppercase()),
    );
}

/// Encode capitalization flags as a run-length stream
pub fn format_caps(caps: &[bool]) -> String {
    let mut out = String::new();
    let mut run: u64 = 0;

    for &upper in caps {
        if upper {
            if run != 0 {
                write_number(&mut out, run);
                run = 0;
            }
            out.push(DELIMITER);
        } else {
            run += 1;
        }
    }

    if run != 0 {
        write_number(&mut out, run);
    }

    out
}

/// Decoded run-length stream.
///
/// Holds the lowercase run lengths as written; an uppercase flag sits
/// between each pair of consecutive runs. Flags are only produced on demand
/// through [`CapsCursor`], so a run length far beyond the document size
/// costs nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapsRuns {
    runs: Vec<u64>,
    total: u64,
}

impl CapsRuns {
    /// Total number of flags, saturating at `u64::MAX`
    pub fn flag_count(&self) -> u64 {
        self.total
    }

    /// Cursor at the first flag
    pub fn cursor(&self) -> CapsCursor<'_> {
        CapsCursor::new(self)
    }

    /// Iterate the flags in order
    pub fn flags(&self) -> CapsCursor<'_> {
        self.cursor()
    }
}

/// Decode a run-length stream
pub fn parse_caps(encoded: &str) -> Result<CapsRuns> {
    let runs = encoded
        .split(DELIMITER)
        .map(decode_number)
        .collect::<Result<Vec<u64>>>()?;

    let uppercase = runs.len() as u64 - 1;
    let total = runs
        .iter()
        .fold(uppercase, |total, &run| total.saturating_add(run));

    Ok(CapsRuns { runs, total })
}

/// Sequential reader over a document's capitalization flags.
///
/// One cursor is threaded through the whole document so that flags are
/// consumed in reading order across line boundaries. Once the flags run out,
/// every further letter stays lowercase.
#[derive(Debug, Clone)]
pub struct CapsCursor<'a> {
    runs: &'a [u64],
    total: u64,
    /// Run currently being read
    run: usize,
    /// Lowercase flags already taken from the current run
    lower: u64,
    /// Letters consumed, including those past the end of the stream
    position: u64,
}

impl<'a> CapsCursor<'a> {
    /// Create a cursor at the start of `caps`
    pub fn new(caps: &'a CapsRuns) -> Self {
        Self {
            runs: &caps.runs,
            total: caps.total,
            run: 0,
            lower: 0,
            position: 0,
        }
    }

    /// Consume the next flag for one letter
    pub fn next_flag(&mut self) -> bool {
        self.position = self.position.saturating_add(1);
        self.next().unwrap_or(false)
    }

    /// Number of letters consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Flags not yet consumed
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.position)
    }

    /// Reapply capitalization to `word`, consuming one flag per ASCII letter
    pub fn apply(&mut self, word: &str) -> String {
        word.chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() && self.next_flag() {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            })
            .collect()
    }
}

impl Iterator for CapsCursor<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        loop {
            let run = *self.runs.get(self.run)?;
            if self.lower < run {
                self.lower += 1;
                return Some(false);
            }
            self.run += 1;
            self.lower = 0;
            if self.run < self.runs.len() {
                return Some(true);
            }
        }
    }
}
