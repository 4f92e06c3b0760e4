// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the enums that represent user-visible choices:
//! which cipher to run and in which direction. Serialized to lowercase so a
//! host dispatch layer can deserialize them straight from form or config
//! input ("vigenere", "encrypt", ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported cipher methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Vigenere,
    Playfair,
    Hill,
}

/// Direction of a transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Vigenere => write!(f, "vigenere"),
            Method::Playfair => write!(f, "playfair"),
            Method::Hill => write!(f, "hill"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "encrypt"),
            Operation::Decrypt => write!(f, "decrypt"),
        }
    }
}
