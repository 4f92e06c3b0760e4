// src/util.rs
//! Small letter-arithmetic helpers shared by the cipher modules
//!
//! Keep this light — if it grows, split further.

use crate::consts::ALPHABET_LEN;

/// Alphabet offset of a lowercase ASCII letter: 'a' → 0, ..., 'z' → 25.
pub(crate) fn offset(c: char) -> i64 {
    debug_assert!(c.is_ascii_lowercase());
    (c as u8 - b'a') as i64
}

/// Letter for an alphabet offset, reduced modulo 26 first.
pub(crate) fn letter(v: i64) -> char {
    (v.rem_euclid(ALPHABET_LEN) as u8 + b'a') as char
}
