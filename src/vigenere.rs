// src/vigenere.rs
//! Vigenère cipher — repeating-key character shift
//!
//! Each letter is shifted by the alphabet offset of the key letter at
//! position `i mod key_len`, where `i` counts **every** character of the
//! text, letters and non-letters alike. A non-letter is copied through
//! unchanged but still consumes its key slot. That indexing rule is part of
//! the contract: encrypt and decrypt agree on it, so round-trips hold even
//! though classic Vigenère would skip key advancement on non-letters.

use crate::error::{CipherError, Result};
use crate::util::{letter, offset};

/// Shift amounts for each key letter, in key order.
///
/// Rejects an empty key (there would be no slot to index) and any key
/// character outside a–z/A–Z.
fn key_stream(key: &str) -> Result<Vec<i64>> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey("key must not be empty"));
    }
    key.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(offset(c.to_ascii_lowercase()))
            } else {
                Err(CipherError::InvalidKey("key must contain only letters"))
            }
        })
        .collect()
}

/// Common shift loop; `sign` is +1 for encrypt, -1 for decrypt.
fn shift(text: &str, key: &str, sign: i64) -> Result<String> {
    let stream = key_stream(key)?;
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() {
            let k = stream[i % stream.len()];
            out.push(letter(offset(c) + sign * k));
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Encrypt `text` with the repeating `key`. Output is lowercase.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    shift(text, key, 1)
}

/// Decrypt `text` with the repeating `key`. Output is lowercase.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    shift(text, key, -1)
}
