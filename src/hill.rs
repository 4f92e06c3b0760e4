// src/hill.rs
//! Hill cipher — n×n key matrix, block multiplication modulo 26
//!
//! The key letters become the row-major entries of a square matrix; text is
//! split into row vectors of length n and multiplied by that matrix modulo
//! 26. Decryption multiplies by the modular inverse matrix, which exists iff
//! `gcd(det mod 26, 26) == 1`.
//!
//! All arithmetic is exact integer arithmetic: the determinant comes from
//! cofactor expansion and the inverse from the adjugate, never from
//! floating-point linear algebra. Entries are 0–25 and block size is capped
//! at [`MAX_HILL_BLOCK`], so every intermediate value fits in `i64`.

use crate::consts::{ALPHABET_LEN, FILLER, MAX_HILL_BLOCK};
use crate::error::{CipherError, Result};
use crate::util::{letter, offset};

/// Square key matrix over ℤ/26ℤ, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    n: usize,
    rows: Vec<Vec<i64>>,
}

impl KeyMatrix {
    /// Builds the matrix from a key of n² letters.
    ///
    /// The key is folded to lowercase and each letter mapped to its alphabet
    /// offset. Errors: empty or non-letter key (`InvalidKey`), length not a
    /// perfect square (`InvalidKeyLength`), block size above the supported
    /// cap (`InvalidKey`).
    pub fn from_key(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("key must not be empty"));
        }
        let entries = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(offset(c.to_ascii_lowercase()))
                } else {
                    Err(CipherError::InvalidKey("key must contain only letters"))
                }
            })
            .collect::<Result<Vec<i64>>>()?;

        let n = isqrt(entries.len());
        if n * n != entries.len() {
            return Err(CipherError::InvalidKeyLength(entries.len()));
        }
        if n > MAX_HILL_BLOCK {
            return Err(CipherError::InvalidKey(
                "key is longer than the supported 36 letters",
            ));
        }

        let rows = entries.chunks(n).map(|row| row.to_vec()).collect();
        Ok(KeyMatrix { n, rows })
    }

    /// Side length of the matrix (the block size).
    pub fn block_size(&self) -> usize {
        self.n
    }

    /// Exact integer determinant via cofactor expansion.
    pub fn determinant(&self) -> i64 {
        determinant_of(&self.rows)
    }

    /// The inverse matrix modulo 26.
    ///
    /// Computed as `adjugate · det⁻¹ (mod 26)`, with `det⁻¹` from the
    /// extended Euclidean algorithm. Fails with [`CipherError::NonInvertibleMatrix`]
    /// when `det mod 26` shares a factor with 26.
    pub fn inverse_mod26(&self) -> Result<KeyMatrix> {
        let det = self.determinant();
        let det_inv = mod_inverse(det.rem_euclid(ALPHABET_LEN))
            .ok_or(CipherError::NonInvertibleMatrix(det))?;

        let n = self.n;
        let mut rows = vec![vec![0i64; n]; n];
        for i in 0..n {
            for j in 0..n {
                // adjugate is the transposed cofactor matrix
                let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                let cofactor = sign * determinant_of(&minor(&self.rows, i, j));
                rows[j][i] = (cofactor * det_inv).rem_euclid(ALPHABET_LEN);
            }
        }
        Ok(KeyMatrix { n, rows })
    }

    /// Row vector times matrix, reduced modulo 26. `v.len()` must equal n.
    fn apply(&self, v: &[i64]) -> Vec<i64> {
        (0..self.n)
            .map(|j| {
                let sum: i64 = (0..self.n).map(|k| v[k] * self.rows[k][j]).sum();
                sum.rem_euclid(ALPHABET_LEN)
            })
            .collect()
    }
}

/// Integer square root by counting up; key lengths are tiny.
fn isqrt(v: usize) -> usize {
    let mut n = 0;
    while (n + 1) * (n + 1) <= v {
        n += 1;
    }
    n
}

/// Matrix with row `i` and column `j` removed.
fn minor(rows: &[Vec<i64>], i: usize, j: usize) -> Vec<Vec<i64>> {
    rows.iter()
        .enumerate()
        .filter(|(r, _)| *r != i)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|(c, _)| *c != j)
                .map(|(_, v)| *v)
                .collect()
        })
        .collect()
}

/// Laplace expansion along the first row.
fn determinant_of(rows: &[Vec<i64>]) -> i64 {
    let n = rows.len();
    if n == 1 {
        return rows[0][0];
    }
    (0..n)
        .map(|j| {
            let sign = if j % 2 == 0 { 1 } else { -1 };
            sign * rows[0][j] * determinant_of(&minor(rows, 0, j))
        })
        .sum()
}

/// Inverse of `a` modulo 26 via the extended Euclidean algorithm, or `None`
/// when `gcd(a, 26) != 1`. Expects `a` already reduced to 0..26.
fn mod_inverse(a: i64) -> Option<i64> {
    let (mut r0, mut r1) = (ALPHABET_LEN, a);
    let (mut t0, mut t1) = (0i64, 1i64);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    if r0 == 1 {
        Some(t0.rem_euclid(ALPHABET_LEN))
    } else {
        None
    }
}

/// Strip non-letters, fold to lowercase, pad with the filler to a block
/// multiple, then multiply every block by `matrix`.
fn transform_blocks(text: &str, matrix: &KeyMatrix) -> String {
    let mut values: Vec<i64> = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| offset(c.to_ascii_lowercase()))
        .collect();
    while values.len() % matrix.block_size() != 0 {
        values.push(offset(FILLER));
    }
    values
        .chunks(matrix.block_size())
        .flat_map(|block| matrix.apply(block))
        .map(letter)
        .collect()
}

/// Encrypt `text` with the matrix derived from `key`.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let matrix = KeyMatrix::from_key(key)?;
    Ok(transform_blocks(text, &matrix))
}

/// Decrypt `text` with the inverse of the matrix derived from `key`.
///
/// Fails with [`CipherError::NonInvertibleMatrix`] when the key matrix has
/// no inverse modulo 26; encryption with the same key still works.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    let inverse = KeyMatrix::from_key(key)?.inverse_mod26()?;
    Ok(transform_blocks(text, &inverse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_vector_3x3() {
        // det = 441, 441 mod 26 = 25, coprime with 26
        assert_eq!(
            encrypt("pay more money", "gybnqkurp").unwrap(),
            "yolwvrsgwmex"
        );
        assert_eq!(
            decrypt("yolwvrsgwmex", "gybnqkurp").unwrap(),
            "paymoremoney"
        );
    }

    #[test]
    fn round_trip_2x2() {
        // "hill" -> [[7,8],[11,11]], det -11, invertible mod 26
        let ct = encrypt("short example", "hill").unwrap();
        assert_eq!(ct, "vnznvofcpbrc");
        assert_eq!(decrypt(&ct, "hill").unwrap(), "shortexample");
    }

    #[test]
    fn pads_to_block_multiple() {
        // 3 letters into 3x3 blocks: no padding; 4 letters: padded to 6
        assert_eq!(encrypt("act", "gybnqkurp").unwrap().len(), 3);
        assert_eq!(encrypt("acts", "gybnqkurp").unwrap().len(), 6);
        assert_eq!(
            decrypt(&encrypt("acts", "gybnqkurp").unwrap(), "gybnqkurp").unwrap(),
            "actsxx"
        );
    }

    #[test]
    fn determinant_is_exact() {
        let m = KeyMatrix::from_key("gybnqkurp").unwrap();
        assert_eq!(m.determinant(), 441);
        let m = KeyMatrix::from_key("abcd").unwrap();
        assert_eq!(m.determinant(), -2);
    }

    #[test]
    fn non_square_key_rejected_both_ways() {
        assert_eq!(
            encrypt("text", "abcde"),
            Err(CipherError::InvalidKeyLength(5))
        );
        assert_eq!(
            decrypt("text", "abcde"),
            Err(CipherError::InvalidKeyLength(5))
        );
    }

    #[test]
    fn even_determinant_fails_decrypt_only() {
        // det(abcd) = -2, shares factor 2 with 26
        assert!(encrypt("test", "abcd").is_ok());
        assert_eq!(
            decrypt("test", "abcd"),
            Err(CipherError::NonInvertibleMatrix(-2))
        );
    }

    #[test]
    fn empty_key_rejected() {
        assert_eq!(
            encrypt("text", ""),
            Err(CipherError::InvalidKey("key must not be empty"))
        );
    }

    #[test]
    fn oversized_key_rejected() {
        let key: String = std::iter::repeat('b').take(49).collect();
        assert_eq!(
            encrypt("text", &key),
            Err(CipherError::InvalidKey(
                "key is longer than the supported 36 letters"
            ))
        );
    }

    #[test]
    fn mod_inverse_matches_gcd() {
        assert_eq!(mod_inverse(1), Some(1));
        assert_eq!(mod_inverse(25), Some(25));
        assert_eq!(mod_inverse(3), Some(9));
        assert_eq!(mod_inverse(13), None);
        assert_eq!(mod_inverse(2), None);
        assert_eq!(mod_inverse(0), None);
    }

    #[test]
    fn strips_non_letters_before_blocking() {
        assert_eq!(
            encrypt("pay, more; money!", "gybnqkurp").unwrap(),
            encrypt("pay more money", "gybnqkurp").unwrap()
        );
    }
}
