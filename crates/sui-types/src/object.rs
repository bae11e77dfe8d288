//! Object identities and references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::address::AccountAddress;
use crate::bcs::{BcsDecode, BcsEncode, Deserializer, Serializer};
use crate::encoding::{base64_decode, base64_encode};
use crate::error::{SuiTxError, SuiTxResult};
use crate::hash::DIGEST_LENGTH;

/// Object identifier; the same 20-byte identity as an account address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectID(AccountAddress);

impl ObjectID {
    pub const LENGTH: usize = AccountAddress::LENGTH;

    pub const fn new(bytes: [u8; AccountAddress::LENGTH]) -> Self {
        Self(AccountAddress::new(bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
        AccountAddress::from_bytes(bytes).map(Self)
    }

    pub fn from_hex(hex_str: &str) -> SuiTxResult<Self> {
        AccountAddress::from_hex(hex_str).map(Self)
    }

    pub fn hex(&self) -> String {
        self.0.hex()
    }

    pub fn as_bytes(&self) -> &[u8; AccountAddress::LENGTH] {
        self.0.as_bytes()
    }

    pub fn address(&self) -> AccountAddress {
        self.0
    }
}

impl From<AccountAddress> for ObjectID {
    fn from(addr: AccountAddress) -> Self {
        Self(addr)
    }
}

impl FromStr for ObjectID {
    type Err = SuiTxError;

    fn from_str(s: &str) -> SuiTxResult<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl fmt::Debug for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectID({})", self.hex())
    }
}

impl BcsEncode for ObjectID {
    fn encode(&self, ser: &mut Serializer) {
        self.0.encode(ser);
    }
}

impl BcsDecode for ObjectID {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        AccountAddress::decode(de).map(Self)
    }
}

/// 32-byte object content hash, interchanged as base64.
///
/// Unlike addresses, a digest is written as a length-prefixed byte string.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectDigest([u8; DIGEST_LENGTH]);

impl ObjectDigest {
    pub const LENGTH: usize = DIGEST_LENGTH;

    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
        let arr: [u8; DIGEST_LENGTH] = bytes
            .try_into()
            .map_err(|_| SuiTxError::length("object digest", DIGEST_LENGTH, bytes.len()))?;
        Ok(Self(arr))
    }

    pub fn from_base64(b64: &str) -> SuiTxResult<Self> {
        Self::from_bytes(&base64_decode(b64, "object digest")?)
    }

    pub fn base64(&self) -> String {
        base64_encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }
}

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base64())
    }
}

impl fmt::Debug for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectDigest({})", self.base64())
    }
}

impl BcsEncode for ObjectDigest {
    fn encode(&self, ser: &mut Serializer) {
        ser.bytes(&self.0);
    }
}

impl BcsDecode for ObjectDigest {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Self::from_bytes(&de.bytes()?)
    }
}

impl Serialize for ObjectDigest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.base64())
    }
}

impl<'de> Deserialize<'de> for ObjectDigest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

/// An object at a specific version. JSON form is `[object_id, sequence_number, digest]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(ObjectID, u64, ObjectDigest)", into = "(ObjectID, u64, ObjectDigest)")]
pub struct ObjectRef {
    pub object_id: ObjectID,
    pub sequence_number: u64,
    pub digest: ObjectDigest,
}

impl ObjectRef {
    pub fn new(object_id: ObjectID, sequence_number: u64, digest: ObjectDigest) -> Self {
        Self {
            object_id,
            sequence_number,
            digest,
        }
    }
}

impl From<(ObjectID, u64, ObjectDigest)> for ObjectRef {
    fn from((object_id, sequence_number, digest): (ObjectID, u64, ObjectDigest)) -> Self {
        Self::new(object_id, sequence_number, digest)
    }
}

impl From<ObjectRef> for (ObjectID, u64, ObjectDigest) {
    fn from(r: ObjectRef) -> Self {
        (r.object_id, r.sequence_number, r.digest)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.object_id, self.sequence_number, self.digest
        )
    }
}

impl BcsEncode for ObjectRef {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.object_id);
        ser.u64(self.sequence_number);
        ser.encode(&self.digest);
    }
}

impl BcsDecode for ObjectRef {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            object_id: de.decode()?,
            sequence_number: de.u64()?,
            digest: de.decode()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_HEX: &str = "0x76a3863d90c99fc89cc82c1072f5887edccf057d";
    const DIGEST_B64: &str = "DPnePK5If6FrZzlp2QOB1KLl2qlNCeZ3DSehQ5MQzQ4=";

    fn sample_ref() -> ObjectRef {
        ObjectRef::new(
            ObjectID::from_hex(ID_HEX).unwrap(),
            1823742269753106181,
            ObjectDigest::from_base64(DIGEST_B64).unwrap(),
        )
    }

    #[test]
    fn test_object_id_has_no_prefix() {
        let id = ObjectID::from_hex(ID_HEX).unwrap();
        assert_eq!(
            hex::encode(id.to_bcs_bytes()),
            "76a3863d90c99fc89cc82c1072f5887edccf057d"
        );
    }

    #[test]
    fn test_object_ref_known_encoding() {
        let bytes = sample_ref().to_bcs_bytes();
        assert_eq!(
            hex::encode(&bytes),
            "76a3863d90c99fc89cc82c1072f5887edccf057d059f7f86ee3b4f19200cf9de3cae487fa16b673969d90381d4a2e5daa94d09e6770d27a1439310cd0e"
        );
        assert_eq!(ObjectRef::from_bcs_bytes(&bytes).unwrap(), sample_ref());
    }

    #[test]
    fn test_digest_length_checked() {
        assert_eq!(
            ObjectDigest::from_bytes(&[0u8; 31]),
            Err(SuiTxError::length("object digest", 32, 31))
        );
        // A length prefix that disagrees with 32 is rejected after reading.
        let mut ser = Serializer::new();
        ser.bytes(&[1u8; 33]);
        assert_eq!(
            ObjectDigest::from_bcs_bytes(ser.output()),
            Err(SuiTxError::length("object digest", 32, 33))
        );
        assert!(matches!(
            ObjectDigest::from_base64("@@@"),
            Err(SuiTxError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_object_ref_json_is_tuple() {
        let json = serde_json::to_value(sample_ref()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([ID_HEX, 1823742269753106181u64, DIGEST_B64])
        );
        let back: ObjectRef = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample_ref());
    }

    #[test]
    fn test_display() {
        let r = sample_ref();
        assert_eq!(
            r.to_string(),
            format!("({}, 1823742269753106181, {})", ID_HEX, DIGEST_B64)
        );
    }
}
