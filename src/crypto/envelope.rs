use std::fmt;

use serde::{Deserialize, Serialize};
use sui_tx_types::encoding::{base64_decode, base64_encode};
use sui_tx_types::{BcsDecode, BcsEncode, Deserializer, Serializer, SuiAddress, SuiTxError, SuiTxResult};
use tracing::{debug, trace, warn};

use super::ed25519::{self, Ed25519KeyPair, Ed25519PublicKey};
use super::secp256k1::{self, Secp256k1KeyPair, Secp256k1PublicKey};
use super::{SchemeVerifier, SignatureScheme, PRIVATE_KEY_LENGTH};

fn split_flag<'a>(what: &'static str, bytes: &'a [u8]) -> SuiTxResult<(SignatureScheme, &'a [u8])> {
    let (&flag, rest) = bytes
        .split_first()
        .ok_or_else(|| SuiTxError::length(what, 1, 0))?;
    Ok((SignatureScheme::from_flag(flag)?, rest))
}

// ============================================================================
// Key pair
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub enum SuiKeyPair {
    Ed25519(Ed25519KeyPair),
    Secp256k1(Secp256k1KeyPair),
}

impl SuiKeyPair {
    pub fn from_private_key(scheme: SignatureScheme, private_key: &[u8]) -> SuiTxResult<Self> {
        match scheme {
            SignatureScheme::Ed25519 => Ed25519KeyPair::from_private_key(private_key).map(Self::Ed25519),
            SignatureScheme::Secp256k1 => {
                Secp256k1KeyPair::from_private_key(private_key).map(Self::Secp256k1)
            }
        }
    }

    pub fn scheme(&self) -> SignatureScheme {
        match self {
            SuiKeyPair::Ed25519(_) => SignatureScheme::Ed25519,
            SuiKeyPair::Secp256k1(_) => SignatureScheme::Secp256k1,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            SuiKeyPair::Ed25519(kp) => PublicKey::Ed25519(kp.public()),
            SuiKeyPair::Secp256k1(kp) => PublicKey::Secp256k1(kp.public()),
        }
    }

    pub fn private_key_bytes(&self) -> &[u8] {
        match self {
            SuiKeyPair::Ed25519(kp) => kp.private_key(),
            SuiKeyPair::Secp256k1(kp) => kp.private_key(),
        }
    }

    /// Sign raw bytes and pack the result with this key's public key.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        match self {
            SuiKeyPair::Ed25519(kp) => Signature::Ed25519(Ed25519SuiSignature::pack(
                &kp.sign(msg),
                kp.public().as_bytes(),
            )),
            SuiKeyPair::Secp256k1(kp) => Signature::Secp256k1(Secp256k1SuiSignature::pack(
                &kp.sign(msg),
                kp.public().as_bytes(),
            )),
        }
    }

    /// Sign the canonical encoding of `value`.
    pub fn sign_message<T: BcsEncode + ?Sized>(&self, value: &T) -> Signature {
        self.sign(&value.to_bcs_bytes())
    }

    /// Base64 of `flag ‖ public_key ‖ private_key`.
    pub fn base64(&self) -> String {
        let public_key = self.public_key();
        let mut data = Vec::with_capacity(self.scheme().packed_keypair_length());
        data.push(self.scheme().flag());
        data.extend_from_slice(public_key.as_bytes());
        data.extend_from_slice(self.private_key_bytes());
        base64_encode(&data)
    }

    /// Inverse of [`SuiKeyPair::base64`]. The embedded public key must match the private key.
    pub fn from_base64(b64: &str) -> SuiTxResult<Self> {
        let data = base64_decode(b64, "keypair")?;
        let (scheme, _) = split_flag("keypair", &data)?;
        let expected = scheme.packed_keypair_length();
        if data.len() != expected {
            return Err(SuiTxError::length("keypair", expected, data.len()));
        }
        let pk_end = 1 + scheme.public_key_length();
        let keypair = Self::from_private_key(scheme, &data[pk_end..pk_end + PRIVATE_KEY_LENGTH])?;
        if keypair.public_key().as_bytes() != &data[1..pk_end] {
            return Err(SuiTxError::InvalidKey(
                "embedded public key does not match private key".to_string(),
            ));
        }
        Ok(keypair)
    }
}

// ============================================================================
// Public key
// ============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519(Ed25519PublicKey),
    Secp256k1(Secp256k1PublicKey),
}

impl PublicKey {
    pub fn from_bytes(scheme: SignatureScheme, bytes: &[u8]) -> SuiTxResult<Self> {
        match scheme {
            SignatureScheme::Ed25519 => Ed25519PublicKey::from_bytes(bytes).map(Self::Ed25519),
            SignatureScheme::Secp256k1 => Secp256k1PublicKey::from_bytes(bytes).map(Self::Secp256k1),
        }
    }

    /// Parse `flag ‖ public_key`.
    pub fn from_flagged_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
        let (scheme, key) = split_flag("public key", bytes)?;
        Self::from_bytes(scheme, key)
    }

    pub fn scheme(&self) -> SignatureScheme {
        match self {
            PublicKey::Ed25519(_) => SignatureScheme::Ed25519,
            PublicKey::Secp256k1(_) => SignatureScheme::Secp256k1,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Ed25519(pk) => pk.as_bytes(),
            PublicKey::Secp256k1(pk) => pk.as_bytes(),
        }
    }

    pub fn flagged_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(1 + self.as_bytes().len());
        data.push(self.scheme().flag());
        data.extend_from_slice(self.as_bytes());
        data
    }

    /// Base64 of `flag ‖ public_key`.
    pub fn base64(&self) -> String {
        base64_encode(&self.flagged_bytes())
    }

    pub fn from_base64(b64: &str) -> SuiTxResult<Self> {
        Self::from_flagged_bytes(&base64_decode(b64, "public key")?)
    }

    pub fn to_sui_address(&self) -> SuiAddress {
        SuiAddress::from_public_key(self.scheme().flag(), self.as_bytes())
    }

    /// Verify a raw (unpacked) scheme signature over `msg`.
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        match self {
            PublicKey::Ed25519(pk) => pk.verify(msg, signature),
            PublicKey::Secp256k1(pk) => pk.verify(msg, signature),
        }
    }
}

impl SchemeVerifier for PublicKey {
    fn scheme(&self) -> SignatureScheme {
        PublicKey::scheme(self)
    }

    fn key_bytes(&self) -> &[u8] {
        self.as_bytes()
    }

    fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        PublicKey::verify(self, msg, signature)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base64())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.base64())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Packed per-scheme signatures
// ============================================================================

macro_rules! sui_signature {
    ($(#[$meta:meta])* $name:ident, $scheme:expr, $backend:ident, $public_key:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        pub struct $name([u8; 1 + $backend::SIGNATURE_LENGTH + $backend::PUBLIC_KEY_LENGTH]);

        impl $name {
            pub const SCHEME: SignatureScheme = $scheme;
            pub const LENGTH: usize = 1 + $backend::SIGNATURE_LENGTH + $backend::PUBLIC_KEY_LENGTH;

            fn pack(
                signature: &[u8; $backend::SIGNATURE_LENGTH],
                public_key: &[u8; $backend::PUBLIC_KEY_LENGTH],
            ) -> Self {
                let mut out = [0u8; Self::LENGTH];
                out[0] = Self::SCHEME.flag();
                out[1..1 + $backend::SIGNATURE_LENGTH].copy_from_slice(signature);
                out[1 + $backend::SIGNATURE_LENGTH..].copy_from_slice(public_key);
                Self(out)
            }

            /// Exactly `LENGTH` bytes whose first byte is this scheme's flag.
            pub fn from_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
                let arr: [u8; Self::LENGTH] = bytes
                    .try_into()
                    .map_err(|_| SuiTxError::length($what, Self::LENGTH, bytes.len()))?;
                if arr[0] != Self::SCHEME.flag() {
                    return Err(SuiTxError::SchemeMismatch(arr[0]));
                }
                Ok(Self(arr))
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// The raw scheme signature.
            pub fn signature(&self) -> &[u8] {
                &self.0[1..1 + $backend::SIGNATURE_LENGTH]
            }

            pub fn public_key(&self) -> $public_key {
                let mut bytes = [0u8; $backend::PUBLIC_KEY_LENGTH];
                bytes.copy_from_slice(&self.0[1 + $backend::SIGNATURE_LENGTH..]);
                $public_key::from(bytes)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), base64_encode(&self.0))
            }
        }

        // Standalone wrappers travel as fixed bytes, no length prefix.
        impl BcsEncode for $name {
            fn encode(&self, ser: &mut Serializer) {
                ser.fixed_bytes(&self.0);
            }
        }

        impl BcsDecode for $name {
            fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
                Self::from_bytes(&de.fixed_bytes(Self::LENGTH)?)
            }
        }
    };
}

sui_signature!(
    /// `0x00 ‖ signature(64) ‖ public_key(32)`
    Ed25519SuiSignature,
    SignatureScheme::Ed25519,
    ed25519,
    Ed25519PublicKey,
    "ed25519 signature"
);

sui_signature!(
    /// `0x01 ‖ signature(65) ‖ public_key(33)`
    Secp256k1SuiSignature,
    SignatureScheme::Secp256k1,
    secp256k1,
    Secp256k1PublicKey,
    "secp256k1 signature"
);

// ============================================================================
// Scheme-tagged signature
// ============================================================================

/// A packed signature, dispatched on its leading flag byte.
///
/// On the wire (inside `SenderSignedData`) it is a length-prefixed byte string;
/// in JSON it is the base64 of the packed bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Signature {
    Ed25519(Ed25519SuiSignature),
    Secp256k1(Secp256k1SuiSignature),
}

impl Signature {
    pub fn from_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
        let (scheme, _) = split_flag("signature", bytes)?;
        match scheme {
            SignatureScheme::Ed25519 => Ed25519SuiSignature::from_bytes(bytes).map(Self::Ed25519),
            SignatureScheme::Secp256k1 => {
                Secp256k1SuiSignature::from_bytes(bytes).map(Self::Secp256k1)
            }
        }
    }

    /// Pack `flag ‖ signature ‖ public_key` from a raw scheme signature.
    pub fn from_public_signature(public_key: &PublicKey, signature: &[u8]) -> SuiTxResult<Self> {
        let mut data = vec![public_key.scheme().flag()];
        data.extend_from_slice(signature);
        data.extend_from_slice(public_key.as_bytes());
        Self::from_bytes(&data)
    }

    pub fn from_base64(b64: &str) -> SuiTxResult<Self> {
        Self::from_bytes(&base64_decode(b64, "signature")?)
    }

    pub fn base64(&self) -> String {
        base64_encode(self.as_bytes())
    }

    pub fn scheme(&self) -> SignatureScheme {
        match self {
            Signature::Ed25519(_) => SignatureScheme::Ed25519,
            Signature::Secp256k1(_) => SignatureScheme::Secp256k1,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Signature::Ed25519(sig) => sig.as_bytes(),
            Signature::Secp256k1(sig) => sig.as_bytes(),
        }
    }

    /// The raw scheme signature, without flag or public key.
    pub fn signature_bytes(&self) -> &[u8] {
        match self {
            Signature::Ed25519(sig) => sig.signature(),
            Signature::Secp256k1(sig) => sig.signature(),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            Signature::Ed25519(sig) => PublicKey::Ed25519(sig.public_key()),
            Signature::Secp256k1(sig) => PublicKey::Secp256k1(sig.public_key()),
        }
    }

    /// Embedded public key, provided it derives `author`.
    pub fn verification_inputs(&self, author: SuiAddress) -> SuiTxResult<(&[u8], PublicKey)> {
        let public_key = self.public_key();
        let derived = public_key.to_sui_address();
        if derived != author {
            warn!(
                declared = %author,
                derived = %derived,
                "signature public key does not derive the declared sender"
            );
            return Err(SuiTxError::SenderMismatch {
                declared: author,
                derived,
            });
        }
        Ok((self.signature_bytes(), public_key))
    }

    /// Check this signature over the canonical encoding of `payload`.
    ///
    /// A key that does not derive `author` is [`SuiTxError::SenderMismatch`];
    /// any cryptographic failure is `Ok(false)`.
    pub fn verify<T: BcsEncode + ?Sized>(&self, payload: &T, author: SuiAddress) -> SuiTxResult<bool> {
        debug!(scheme = %self.scheme(), sender = %author, "verifying signature");
        let (signature, public_key) = self.verification_inputs(author)?;
        let msg = payload.to_bcs_bytes();
        trace!(msg = %hex::encode(&msg), "verification message");
        let valid = public_key.verify(&msg, signature);
        debug!(valid, "signature verification finished");
        Ok(valid)
    }

    /// Like [`Signature::verify`] but every failure, including a sender mismatch, is `false`.
    pub fn verifies<T: BcsEncode + ?Sized>(&self, payload: &T, author: SuiAddress) -> bool {
        self.verify(payload, author).unwrap_or(false)
    }
}

impl From<Ed25519SuiSignature> for Signature {
    fn from(sig: Ed25519SuiSignature) -> Self {
        Signature::Ed25519(sig)
    }
}

impl From<Secp256k1SuiSignature> for Signature {
    fn from(sig: Secp256k1SuiSignature) -> Self {
        Signature::Secp256k1(sig)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base64())
    }
}

impl BcsEncode for Signature {
    fn encode(&self, ser: &mut Serializer) {
        ser.bytes(self.as_bytes());
    }
}

impl BcsDecode for Signature {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Self::from_bytes(&de.bytes()?)
    }
}

impl Serialize for Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.base64())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(serde::de::Error::custom)
    }
}
