//! Test vector types for encoded Argon2id hashes.
//!
//! Success vectors were computed with an independent RFC 9106 implementation
//! that reproduces the RFC's Argon2id test vector.

// Some fields exist only to document the vectors
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Expected cost parameters of a success vector.
#[derive(Debug, Deserialize)]
pub struct HashOptions {
    pub time_cost: u32,
    pub memory_cost: u32,
    pub parallelism: u8,
    pub key_length: usize,
}

/// Test vector for an encoded hash string.
#[derive(Debug, Deserialize)]
pub struct HashTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Password the hash was generated from (null for fail tests)
    pub password: Option<String>,
    /// Hex-encoded salt bytes (null for fail tests)
    pub salt: Option<String>,
    /// Expected decoded parameters (null for fail tests)
    pub options: Option<HashOptions>,
    /// The encoded hash string
    pub hash: String,
    /// Expected error kind for fail tests: `malformed` or `invalid-parameters`
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
