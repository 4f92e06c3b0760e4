// src/dispatch.rs
//! The single entry point consumed by host dispatch layers
//!
//! A closed `(method, operation)` match over the six pure cipher functions.
//! Policy checks such as minimum key length belong to the caller; the core
//! only enforces the structural key constraints of each cipher.

use crate::enums::{Method, Operation};
use crate::error::Result;
use crate::{hill, playfair, vigenere};

/// Runs one cipher operation over `text` with `key`.
///
/// Pure and stateless: same inputs always produce the same output, and the
/// call is safe from any number of threads.
pub fn transform(method: Method, operation: Operation, text: &str, key: &str) -> Result<String> {
    #[cfg(feature = "logging")]
    tracing::debug!(%method, %operation, text_len = text.len(), "running cipher transform");

    match (method, operation) {
        (Method::Vigenere, Operation::Encrypt) => vigenere::encrypt(text, key),
        (Method::Vigenere, Operation::Decrypt) => vigenere::decrypt(text, key),
        (Method::Playfair, Operation::Encrypt) => playfair::encrypt(text, key),
        (Method::Playfair, Operation::Decrypt) => playfair::decrypt(text, key),
        (Method::Hill, Operation::Encrypt) => hill::encrypt(text, key),
        (Method::Hill, Operation::Decrypt) => hill::decrypt(text, key),
    }
}
