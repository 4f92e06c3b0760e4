// tests/vector_tests.rs
//! Known-answer tests driven by JSON vector files

mod support;
use support::init_tracing;

use classic_ciphers::{transform, Method, Operation};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct TestVector {
    method: Method,
    key: String,
    plaintext: String,
    ciphertext: String,
    /// What decrypting `ciphertext` yields. Differs from `plaintext` where
    /// the cipher folds case, strips non-letters or keeps its filler.
    decrypts_to: String,
}

fn load_vectors() -> Vec<TestVector> {
    let json = fs::read_to_string("tests/vector/data/cipher_vectors.json")
        .expect("read vector file");
    serde_json::from_str(&json).expect("parse vectors")
}

#[test]
fn encrypt_vectors() {
    init_tracing();
    for v in load_vectors() {
        let got = transform(v.method, Operation::Encrypt, &v.plaintext, &v.key).unwrap();
        assert_eq!(
            got, v.ciphertext,
            "{} encrypt of {:?} with key {:?}",
            v.method, v.plaintext, v.key
        );
    }
}

#[test]
fn decrypt_vectors() {
    init_tracing();
    for v in load_vectors() {
        let got = transform(v.method, Operation::Decrypt, &v.ciphertext, &v.key).unwrap();
        assert_eq!(
            got, v.decrypts_to,
            "{} decrypt of {:?} with key {:?}",
            v.method, v.ciphertext, v.key
        );
    }
}

#[test]
fn method_names_deserialize_lowercase() {
    // Same spelling a host dispatch layer receives from form input.
    assert_eq!(
        serde_json::from_str::<Method>("\"vigenere\"").unwrap(),
        Method::Vigenere
    );
    assert_eq!(
        serde_json::from_str::<Operation>("\"decrypt\"").unwrap(),
        Operation::Decrypt
    );
    assert_eq!(serde_json::to_string(&Method::Hill).unwrap(), "\"hill\"");
}
