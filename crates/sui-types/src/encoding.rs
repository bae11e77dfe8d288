//! Encoding utilities for hex and base64.
//!
//! Interchange forms used across the workspace: identities travel as `0x`-prefixed hex,
//! digests and packed key material as standard base64. These helpers fold the
//! decoding error into [`SuiTxError::MalformedInput`] with a context string.

use base64::Engine;

use crate::error::{SuiTxError, SuiTxResult};

// =============================================================================
// Hex
// =============================================================================

/// Strip an optional `0x`/`0X` prefix and surrounding whitespace.
pub fn strip_hex_prefix(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Left-pad a hex string with zeros to `width` characters, after stripping any prefix.
///
/// Longer inputs are returned unchanged so the caller's length check still fires.
///
/// ```
/// use sui_tx_types::encoding::pad_hex;
///
/// assert_eq!(pad_hex("0x2", 6), "000002");
/// assert_eq!(pad_hex("ABC", 4), "0ABC");
/// ```
pub fn pad_hex(s: &str, width: usize) -> String {
    format!("{:0>width$}", strip_hex_prefix(s), width = width)
}

/// Decode hex (with or without `0x`) to raw bytes.
///
/// # Arguments
/// * `hex_str` - Hex string
/// * `context` - Description for error messages (e.g. "address", "public key")
pub fn parse_hex_bytes(hex_str: &str, context: &str) -> SuiTxResult<Vec<u8>> {
    let stripped = strip_hex_prefix(hex_str);
    hex::decode(stripped)
        .map_err(|e| SuiTxError::malformed(format!("invalid {} hex '{}': {}", context, hex_str, e)))
}

/// Lowercase `0x`-prefixed hex.
pub fn hex_with_prefix(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// =============================================================================
// Base64
// =============================================================================

/// Encode bytes to a standard (padded) base64 string.
pub fn base64_encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 with a context-aware error message.
///
/// # Arguments
/// * `b64` - Base64 encoded string
/// * `context` - Description for error messages (e.g. "object digest", "keypair")
pub fn base64_decode(b64: &str, context: &str) -> SuiTxResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(b64.trim())
        .map_err(|e| SuiTxError::malformed(format!("failed to decode {} from base64: {}", context, e)))
}

// =============================================================================
// Serde helpers
// =============================================================================

/// Serde helper for base64 encoding/decoding `Vec<u8>`.
pub mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(&s)
            .map_err(serde::de::Error::custom)
    }
}

/// Serde helper for `Vec<Vec<u8>>` as a list of base64 strings (module bytecode lists).
pub mod base64_seq {
    use base64::Engine;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(items: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(items.len()))?;
        for item in items {
            seq.serialize_element(&base64::engine::general_purpose::STANDARD.encode(item))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| {
                base64::engine::general_purpose::STANDARD
                    .decode(s)
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_and_pad() {
        assert_eq!(strip_hex_prefix("  0XaB "), "aB");
        assert_eq!(strip_hex_prefix("ab"), "ab");
        assert_eq!(pad_hex("0x1", 40).len(), 40);
        assert!(pad_hex("0x1", 40).ends_with("01"));
        // Too long stays too long.
        assert_eq!(pad_hex("0x123456", 4), "123456");
    }

    #[test]
    fn test_parse_hex_bytes() {
        assert_eq!(parse_hex_bytes("0x0102", "test").unwrap(), vec![1, 2]);
        let err = parse_hex_bytes("0xzz", "public key").unwrap_err();
        assert!(matches!(err, SuiTxError::MalformedInput(_)));
        assert!(err.to_string().contains("public key"));
        assert_eq!(hex_with_prefix(&[0xab, 0x01]), "0xab01");
    }

    #[test]
    fn test_base64_roundtrip() {
        let original = b"hello world";
        let encoded = base64_encode(original);
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
        let decoded = base64_decode(&encoded, "test").unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_base64_decode_error() {
        let result = base64_decode("not-valid-base64!!!", "test data");
        assert!(result.unwrap_err().to_string().contains("test data"));
    }

    #[test]
    fn test_serde_helpers() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Blob {
            #[serde(with = "base64_bytes")]
            one: Vec<u8>,
            #[serde(with = "base64_seq")]
            many: Vec<Vec<u8>>,
        }

        let blob = Blob {
            one: vec![1, 2, 3],
            many: vec![vec![0xff], vec![]],
        };
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#"{"one":"AQID","many":["/w==",""]}"#);
        assert_eq!(serde_json::from_str::<Blob>(&json).unwrap(), blob);
    }
}
