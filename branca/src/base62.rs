//! Base62 encoding.
//!
//! Tokens are encoded as a single big-endian unsigned integer written with the digits
//! `0-9A-Za-z`. Each leading zero byte is written as a leading `0` digit, and each leading
//! `0` digit decodes back to a zero byte, so encoding is lossless for every byte string.
//!
//! Branca tokens always start with [`VERSION`](crate::VERSION) which is non-zero,
//! so a well-formed token never begins with `0`.

use core::fmt::{self, Write};

use crate::BrancaError;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encode the bytes as a base62 string.
pub fn encode(bytes: &[u8]) -> String {
    let digits = to_digits(bytes);
    digits.iter().rev().map(|&d| ALPHABET[d as usize] as char).collect()
}

pub fn write_to_fmt(bytes: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    for &d in to_digits(bytes).iter().rev() {
        f.write_char(ALPHABET[d as usize] as char)?;
    }
    Ok(())
}

/// Decode a base62 string into bytes.
///
/// Runs in time quadratic in `src.len()`. Bound the length of untrusted input first.
pub fn decode_vec(src: &str) -> Result<Vec<u8>, BrancaError> {
    let src = src.as_bytes();
    let zeros = src.iter().take_while(|&&c| c == ALPHABET[0]).count();

    // log(62) / log(256) is just under 0.75
    let mut bytes: Vec<u8> = Vec::with_capacity(src.len() * 3 / 4 + 1);
    for &c in &src[zeros..] {
        let mut carry = decode_digit(c).ok_or(BrancaError::DecodeError)? as u32;
        for b in &mut bytes {
            carry += *b as u32 * 62;
            *b = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    bytes.extend(core::iter::repeat_n(0, zeros));
    bytes.reverse();
    Ok(bytes)
}

/// Little-endian base62 digits of `bytes`, including one zero digit per leading zero byte.
fn to_digits(bytes: &[u8]) -> Vec<u8> {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // log(256) / log(62) is just under 1.35
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 135 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = byte as u32;
        for d in &mut digits {
            carry += (*d as u32) << 8;
            *d = (carry % 62) as u8;
            carry /= 62;
        }
        while carry > 0 {
            digits.push((carry % 62) as u8);
            carry /= 62;
        }
    }

    digits.extend(core::iter::repeat_n(0, zeros));
    digits
}

fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'Z' => Some(c - b'A' + 10),
        b'a'..=b'z' => Some(c - b'a' + 36),
        _ => None,
    }
}
