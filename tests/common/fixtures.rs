//! Fixture loading for the vector corpus.
//!
//! Each entry pairs a JSON value with its expected base64 wire encoding, so a test can
//! go JSON -> typed value -> bytes and compare, or decode the bytes and compare values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

pub const VECTORS_PATH: &str = "tests/fixtures/vectors.json";

#[derive(Debug, Deserialize)]
pub struct Vector {
    pub value: Value,
    pub serialization: String,
}

#[derive(Debug, Deserialize)]
pub struct SignedVector {
    pub value: Value,
    pub serialization: String,
    pub digest: String,
}

#[derive(Debug, Deserialize)]
pub struct KeyPairVector {
    pub scheme: u8,
    pub serialization: String,
    pub public_key: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct Vectors {
    pub kinds: Vec<Vector>,
    pub tx_data: Vec<Vector>,
    pub signed_txs: Vec<SignedVector>,
    pub key_pairs: Vec<KeyPairVector>,
}

pub fn try_load_vectors(path: &Path) -> Result<Vectors> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load the corpus relative to the crate root.
///
/// # Panics
///
/// Panics if the fixture file is missing or malformed.
pub fn load_vectors() -> Vectors {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(VECTORS_PATH);
    try_load_vectors(&path).expect("vector corpus should load")
}
