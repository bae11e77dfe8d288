//! Signature schemes and the scheme-tagged key/signature envelope.
//!
//! Two curve backends are supported, each identified by a one-byte flag that is also
//! the first byte of every packed form:
//!
//! | Scheme | Flag | Public key | Signature |
//! |---|---|---|---|
//! | Ed25519 | `0x00` | 32 bytes | 64 bytes |
//! | Secp256k1 | `0x01` | 33 bytes (compressed) | 65 bytes (`r ‖ s ‖ recovery id`) |
//!
//! Two packed layouts exist and must not be confused:
//! - signature: `flag ‖ signature ‖ public_key` (see [`Signature`])
//! - keypair: `flag ‖ public_key ‖ private_key` (see [`SuiKeyPair::base64`])
//!
//! The backends ([`ed25519`], [`secp256k1`]) are thin wrappers over `fastcrypto` that
//! implement [`SchemeSigner`] and [`SchemeVerifier`]; everything above them only
//! sees raw bytes and a scheme.

use std::fmt;

use sui_tx_types::{SuiTxError, SuiTxResult};

pub mod ed25519;
mod envelope;
pub mod secp256k1;

pub use envelope::{Ed25519SuiSignature, PublicKey, Secp256k1SuiSignature, Signature, SuiKeyPair};

/// Length of a raw private key for both schemes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    Ed25519,
    Secp256k1,
}

impl SignatureScheme {
    pub const fn flag(self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => 0x00,
            SignatureScheme::Secp256k1 => 0x01,
        }
    }

    pub fn from_flag(flag: u8) -> SuiTxResult<Self> {
        match flag {
            0x00 => Ok(SignatureScheme::Ed25519),
            0x01 => Ok(SignatureScheme::Secp256k1),
            other => Err(SuiTxError::SchemeMismatch(other)),
        }
    }

    pub const fn public_key_length(self) -> usize {
        match self {
            SignatureScheme::Ed25519 => ed25519::PUBLIC_KEY_LENGTH,
            SignatureScheme::Secp256k1 => secp256k1::PUBLIC_KEY_LENGTH,
        }
    }

    pub const fn signature_length(self) -> usize {
        match self {
            SignatureScheme::Ed25519 => ed25519::SIGNATURE_LENGTH,
            SignatureScheme::Secp256k1 => secp256k1::SIGNATURE_LENGTH,
        }
    }

    /// `flag ‖ signature ‖ public_key`
    pub const fn packed_signature_length(self) -> usize {
        1 + self.signature_length() + self.public_key_length()
    }

    /// `flag ‖ public_key ‖ private_key`
    pub const fn packed_keypair_length(self) -> usize {
        1 + self.public_key_length() + PRIVATE_KEY_LENGTH
    }

    pub const fn name(self) -> &'static str {
        match self {
            SignatureScheme::Ed25519 => "ed25519",
            SignatureScheme::Secp256k1 => "secp256k1",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signing capability of a curve backend.
pub trait SchemeSigner {
    fn scheme(&self) -> SignatureScheme;

    fn public_key_bytes(&self) -> Vec<u8>;

    fn private_key_bytes(&self) -> Vec<u8>;

    /// Raw scheme signature over `msg` (any hashing is the backend's business).
    fn sign(&self, msg: &[u8]) -> Vec<u8>;
}

/// Verification capability of a curve backend.
///
/// `verify` never errors: malformed keys or signatures are simply `false`.
pub trait SchemeVerifier {
    fn scheme(&self) -> SignatureScheme;

    fn key_bytes(&self) -> &[u8];

    fn verify(&self, msg: &[u8], signature: &[u8]) -> bool;
}

/// All `sigs[i]` verify `msg` under `pks[i]`.
///
/// Empty input or a count mismatch is an error rather than a vacuous `true`.
pub fn verify_batch_empty_fail<V, S>(msg: &[u8], pks: &[V], sigs: &[S]) -> SuiTxResult<bool>
where
    V: SchemeVerifier,
    S: AsRef<[u8]>,
{
    if sigs.is_empty() {
        return Err(SuiTxError::ShapeMismatch(
            "expected at least one signature and public key".to_string(),
        ));
    }
    if sigs.len() != pks.len() {
        return Err(SuiTxError::ShapeMismatch(format!(
            "mismatch between number of signatures ({}) and public keys ({})",
            sigs.len(),
            pks.len()
        )));
    }
    Ok(pks
        .iter()
        .zip(sigs)
        .all(|(pk, sig)| pk.verify(msg, sig.as_ref())))
}

/// All `sigs[i]` verify `msgs[i]` under `pks[i]`.
pub fn verify_batch_empty_fail_different_msgs<V, M, S>(
    msgs: &[M],
    pks: &[V],
    sigs: &[S],
) -> SuiTxResult<bool>
where
    V: SchemeVerifier,
    M: AsRef<[u8]>,
    S: AsRef<[u8]>,
{
    if sigs.is_empty() {
        return Err(SuiTxError::ShapeMismatch(
            "expected at least one message, signature and public key".to_string(),
        ));
    }
    if sigs.len() != pks.len() || msgs.len() != sigs.len() {
        return Err(SuiTxError::ShapeMismatch(format!(
            "mismatch between number of messages ({}), signatures ({}) and public keys ({})",
            msgs.len(),
            sigs.len(),
            pks.len()
        )));
    }
    Ok(pks
        .iter()
        .zip(sigs)
        .zip(msgs)
        .all(|((pk, sig), msg)| pk.verify(msg.as_ref(), sig.as_ref())))
}
