// src/playfair.rs
//! Playfair cipher — 5×5 key table + digraph substitution
//!
//! The key seeds a 25-letter table (`j` merged into `i`): deduplicated key
//! letters first, then the remaining alphabet in order. Text is processed as
//! letter pairs; a dangling letter is paired with the filler `x`. Adjacent
//! identical letters are paired directly — no filler is inserted between
//! them, which deviates from textbook Playfair and is kept on purpose so
//! output stays compatible with the reference behavior.
//!
//! Because the filler is baked into the ciphertext, decryption reproduces it
//! (`"instruments"` comes back as `"instrumentsx"`). That is a documented
//! limitation, not a defect.

use crate::consts::{FILLER, PLAYFAIR_ALPHABET, PLAYFAIR_SIDE};
use crate::error::{CipherError, Result};

/// The derived 5×5 letter table.
///
/// Invariant: every letter a–z except `j` appears exactly once; key letters
/// first in first-occurrence order, then alphabet fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairTable {
    cells: [[char; PLAYFAIR_SIDE]; PLAYFAIR_SIDE],
    // (row, col) per letter; 'j' shares 'i''s cell
    positions: [(u8, u8); 26],
}

impl PlayfairTable {
    /// Builds the table from a key.
    ///
    /// Folds the key to lowercase, drops non-letters, maps `j` to `i`,
    /// deduplicates preserving first occurrence, then appends the remaining
    /// alphabet. A key without a single letter cannot seed a table.
    pub fn from_key(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("key must not be empty"));
        }

        let key_letters: Vec<char> = key
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .map(|c| if c == 'j' { 'i' } else { c })
            .collect();
        if key_letters.is_empty() {
            return Err(CipherError::InvalidKey(
                "key must contain at least one letter",
            ));
        }

        let mut order = Vec::with_capacity(PLAYFAIR_SIDE * PLAYFAIR_SIDE);
        let mut seen = [false; 26];
        for c in key_letters.into_iter().chain(PLAYFAIR_ALPHABET.chars()) {
            let idx = (c as u8 - b'a') as usize;
            if !seen[idx] {
                seen[idx] = true;
                order.push(c);
            }
        }

        let mut cells = [['a'; PLAYFAIR_SIDE]; PLAYFAIR_SIDE];
        let mut positions = [(0u8, 0u8); 26];
        for (i, c) in order.iter().enumerate() {
            let (row, col) = (i / PLAYFAIR_SIDE, i % PLAYFAIR_SIDE);
            cells[row][col] = *c;
            positions[(*c as u8 - b'a') as usize] = (row as u8, col as u8);
        }
        positions[(b'j' - b'a') as usize] = positions[(b'i' - b'a') as usize];

        Ok(PlayfairTable { cells, positions })
    }

    /// The table rows, row-major.
    pub fn rows(&self) -> &[[char; PLAYFAIR_SIDE]; PLAYFAIR_SIDE] {
        &self.cells
    }

    /// Locates a lowercase letter; `j` resolves to `i`'s cell.
    fn position(&self, c: char) -> (usize, usize) {
        debug_assert!(c.is_ascii_lowercase());
        let (row, col) = self.positions[(c as u8 - b'a') as usize];
        (row as usize, col as usize)
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }
}

/// Wraps a row or column index one step in `dir` (+1 or -1), modulo 5.
fn step(i: usize, dir: i64) -> usize {
    (i as i64 + dir).rem_euclid(PLAYFAIR_SIDE as i64) as usize
}

/// Digraph walk shared by both directions; `dir` is +1 for encrypt,
/// -1 for decrypt.
///
/// Non-letters are copied through immediately without consuming a pairing
/// slot. A letter whose successor is missing or non-alphabetic is paired
/// with the filler and the cursor advances one position only.
fn substitute(text: &str, table: &PlayfairTable, dir: i64) -> String {
    let chars: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    let mut out = String::with_capacity(chars.len() + 1);
    let mut i = 0;
    while i < chars.len() {
        let a = chars[i];
        if !a.is_ascii_alphabetic() {
            out.push(a);
            i += 1;
            continue;
        }
        let b = match chars.get(i + 1) {
            Some(&next) if next.is_ascii_alphabetic() => {
                i += 2;
                next
            }
            _ => {
                i += 1;
                FILLER
            }
        };

        let (row_a, col_a) = table.position(a);
        let (row_b, col_b) = table.position(b);
        if row_a == row_b {
            out.push(table.at(row_a, step(col_a, dir)));
            out.push(table.at(row_b, step(col_b, dir)));
        } else if col_a == col_b {
            out.push(table.at(step(row_a, dir), col_a));
            out.push(table.at(step(row_b, dir), col_b));
        } else {
            // rectangle rule: swap columns; its own inverse
            out.push(table.at(row_a, col_b));
            out.push(table.at(row_b, col_a));
        }
    }
    out
}

/// Encrypt `text` with the table derived from `key`.
///
/// Text is folded to lowercase and `j` is mapped to `i` before pairing.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let table = PlayfairTable::from_key(key)?;
    let folded: String = text
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c == 'j' { 'i' } else { c })
        .collect();
    Ok(substitute(&folded, &table, 1))
}

/// Decrypt `text` with the table derived from `key`.
///
/// Ciphertext is assumed already normalized; it is folded to lowercase but
/// `j` is not remapped (a stray `j` still resolves to `i`'s table cell).
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    let table = PlayfairTable::from_key(key)?;
    Ok(substitute(text, &table, -1))
}
