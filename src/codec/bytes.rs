//! Base-92 encoding of arbitrary byte strings.
//!
//! The byte string is read as one big-endian number and converted to base 92
//! with the digit alphabet of [`super::digits`]. Leading zero bytes carry no
//! numeric value, so each one is written as a leading `0` digit (`' '`) to
//! keep the conversion lossless.
//!
//! Also holds the MSB-first bit packing helpers used to turn flag sequences
//! into bytes.

use super::digits::{ascii_to_digit, digit_to_ascii, BASE};
use crate::error::{CtffError, Result};

/// Encode bytes as base-92 text
pub fn encode_bytes(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-92 digits of the significant part
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 5 / 4 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = u32::from(byte);
        for digit in &mut digits {
            carry += u32::from(*digit) << 8;
            *digit = (carry % BASE as u32) as u8;
            carry /= BASE as u32;
        }
        while carry > 0 {
            digits.push((carry % BASE as u32) as u8);
            carry /= BASE as u32;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat(' ').take(zeros));
    for &digit in digits.iter().rev() {
        if let Some(ascii) = digit_to_ascii(digit) {
            out.push(char::from(ascii));
        }
    }
    out
}

/// Decode base-92 text produced by [`encode_bytes`]
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>> {
    let mut zeros = 0;
    let mut leading = true;

    // Little-endian base-256 bytes of the significant part
    let mut bytes: Vec<u8> = Vec::with_capacity(encoded.len());
    for (position, ch) in encoded.chars().enumerate() {
        let digit = u8::try_from(ch)
            .ok()
            .and_then(ascii_to_digit)
            .ok_or(CtffError::InvalidDigit { ch, position })?;

        if leading && digit == 0 {
            zeros += 1;
            continue;
        }
        leading = false;

        let mut carry = u32::from(digit);
        for byte in &mut bytes {
            carry += u32::from(*byte) * BASE as u32;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

/// Pack flags into bytes, most significant bit first.
///
/// The last byte is zero-padded.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; (bits.len() + 7) / 8];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    bytes
}

/// Unpack the first `count` flags from bytes written by [`pack_bits`].
///
/// Flags past the end of `bytes` are `false`.
pub fn unpack_bits(bytes: &[u8], count: usize) -> Vec<bool> {
    (0..count)
        .map(|i| {
            bytes
                .get(i / 8)
                .map_or(false, |byte| byte & (1 << (7 - (i % 8))) != 0)
        })
        .collect()
}
