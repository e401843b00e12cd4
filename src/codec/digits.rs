//! Base-92 digit codec.
//!
//! Integers are written big-endian in base 92, most significant digit first.
//! Each digit maps to one printable ASCII character:
//!
//! ```text
//! digit + 32, then step over '*' (42), '+' (43) and ';' (59)
//!
//!  0 -> ' '    9 -> ')'   10 -> ','   24 -> ':'   25 -> '<'   91 -> '~'
//! ```
//!
//! The three skipped characters are the structural markers of the token
//! format (literal, suffix separator, delimiter) so an encoded number can
//! never be mistaken for one of them.
//!
//! - 0-91: 1 char
//! - 92-8463: 2 chars
//! - 8464-778687: 3 chars

use crate::error::{CtffError, Result};

/// Number base
pub const BASE: u64 = 92;

/// Code point of digit 0 before any reserved character is skipped
const FIRST_CODE_POINT: u8 = 32;

/// Characters excluded from the digit alphabet, in ascending order
pub const RESERVED: [u8; 3] = [b'*', b'+', b';'];

/// Map a digit in `0..92` to its alphabet character.
///
/// Returns `None` for values outside the digit range.
pub fn digit_to_ascii(digit: u8) -> Option<u8> {
    if u64::from(digit) >= BASE {
        return None;
    }
    let mut ascii = digit + FIRST_CODE_POINT;
    for reserved in RESERVED {
        if ascii >= reserved {
            ascii += 1;
        }
    }
    Some(ascii)
}

/// Map an alphabet character back to its digit.
///
/// Returns `None` for reserved characters and anything outside printable ASCII.
pub fn ascii_to_digit(ascii: u8) -> Option<u8> {
    if !(FIRST_CODE_POINT..=b'~').contains(&ascii) || RESERVED.contains(&ascii) {
        return None;
    }
    let mut value = ascii;
    for reserved in RESERVED.iter().rev() {
        if value >= *reserved {
            value -= 1;
        }
    }
    Some(value - FIRST_CODE_POINT)
}

/// Split a number into base-92 digits, most significant first.
///
/// Zero is a single `0` digit, never an empty sequence.
pub fn to_digits(mut value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push((value % BASE) as u8);
        value /= BASE;
    }
    digits.reverse();
    digits
}

/// Combine base-92 digits, most significant first, into a number.
///
/// Returns `None` on overflow or if a digit is out of range. An empty
/// sequence is zero.
pub fn from_digits(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, &digit| {
        if u64::from(digit) >= BASE {
            return None;
        }
        acc.checked_mul(BASE)?.checked_add(u64::from(digit))
    })
}

/// Append the alphabet form of `value` to `out`
pub fn write_number(out: &mut String, value: u64) {
    for digit in to_digits(value) {
        if let Some(ascii) = digit_to_ascii(digit) {
            out.push(char::from(ascii));
        }
    }
}

/// Encode a number as alphabet characters
pub fn encode_number(value: u64) -> String {
    let mut out = String::new();
    write_number(&mut out, value);
    out
}

/// Decode a run of alphabet characters into a number.
///
/// The empty string decodes to zero, matching [`from_digits`].
pub fn decode_number(encoded: &str) -> Result<u64> {
    let mut value: u64 = 0;
    for (position, ch) in encoded.chars().enumerate() {
        let digit = u8::try_from(ch)
            .ok()
            .and_then(ascii_to_digit)
            .ok_or(CtffError::InvalidDigit { ch, position })?;
        value = value
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| CtffError::Overflow(format!("base-92 run {encoded:?}")))?;
    }
    Ok(value)
}

/// Number of alphabet characters needed to encode a value
pub fn encoded_len(value: u64) -> usize {
    let mut len = 1;
    let mut rest = value / BASE;
    while rest > 0 {
        len += 1;
        rest /= BASE;
    }
    len
}
