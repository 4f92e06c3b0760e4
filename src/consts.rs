// src/consts.rs
//! Shared constants — alphabet geometry and limits

/// Size of the cipher alphabet (a–z).
pub const ALPHABET_LEN: i64 = 26;

/// Side length of the Playfair table.
pub const PLAYFAIR_SIDE: usize = 5;

/// The 25-letter Playfair alphabet — `j` is merged into `i`.
pub const PLAYFAIR_ALPHABET: &str = "abcdefghiklmnopqrstuvwxyz";

/// Letter used to pad ragged input (Playfair dangling digraph, Hill blocks).
pub const FILLER: char = 'x';

/// Largest supported Hill block size.
// Cofactor-expansion determinants stay well inside i64 up to here.
pub const MAX_HILL_BLOCK: usize = 6;
