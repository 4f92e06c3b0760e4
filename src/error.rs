// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// Everything that can go wrong inside the cipher core.
///
/// Errors are values; the core never panics on bad input and never logs or
/// retries — the caller decides what to show the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key is empty or contains characters outside a–z/A–Z.
    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    /// Hill key length is not a perfect square (4, 9, 16, ...).
    #[error("key length {0} is not a perfect square")]
    InvalidKeyLength(usize),

    /// Hill key matrix has no inverse modulo 26; raised only on decrypt.
    #[error("key matrix is not invertible modulo 26 (determinant {0})")]
    NonInvertibleMatrix(i64),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_key() {
        let err = CipherError::InvalidKey("key must not be empty");
        assert_eq!(format!("{err}"), "invalid key: key must not be empty");
    }

    #[test]
    fn display_invalid_key_length() {
        let err = CipherError::InvalidKeyLength(5);
        assert_eq!(format!("{err}"), "key length 5 is not a perfect square");
    }

    #[test]
    fn display_non_invertible() {
        let err = CipherError::NonInvertibleMatrix(-2);
        assert_eq!(
            format!("{err}"),
            "key matrix is not invertible modulo 26 (determinant -2)"
        );
    }
}
