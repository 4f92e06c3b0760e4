// src/lib.rs
//! classic-ciphers — Vigenère, Playfair and Hill text ciphers
//!
//! Three independent, stateless cipher modules behind one dispatch contract:
//! - Vigenère: per-character modular shift from a repeating key stream
//! - Playfair: 5×5 key table + digraph substitution
//! - Hill: n×n key matrix, block multiplication modulo 26
//!
//! All three operate on ASCII letters a–z, fold input to lowercase, and are
//! pure functions of `(text, key)` — no shared state, safe to call from any
//! number of threads.
//!
//! ```
//! use classic_ciphers::{transform, Method, Operation};
//!
//! let ct = transform(Method::Vigenere, Operation::Encrypt, "attackatdawn", "lemonlemonle").unwrap();
//! assert_eq!(ct, "lxfopvefrnhr");
//! ```

pub mod consts;
pub mod dispatch;
pub mod enums;
pub mod error;
pub mod hill;
pub mod playfair;
pub mod vigenere;

mod util;

// Re-export everything users need at the crate root
pub use dispatch::transform;
pub use enums::{Method, Operation};
pub use error::{CipherError, Result};
pub use hill::KeyMatrix;
pub use playfair::PlayfairTable;
