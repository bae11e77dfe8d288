//! Secp256k1 backend with recoverable signatures.
//!
//! Messages are hashed with SHA-256 before signing. A signature is the 64-byte compact
//! `r ‖ s` followed by the recovery id. Verification recovers a key from the message
//! and signature and compares its compressed form with the claimed key.

use fastcrypto::hash::Sha256;
use fastcrypto::secp256k1::recoverable::Secp256k1RecoverableSignature;
use fastcrypto::secp256k1::{Secp256k1KeyPair as FcKeyPair, Secp256k1PrivateKey as FcPrivateKey};
use fastcrypto::traits::{KeyPair, RecoverableSignature, RecoverableSigner, ToFromBytes};
use sui_tx_types::{SuiTxError, SuiTxResult};

use super::{SchemeSigner, SchemeVerifier, SignatureScheme, PRIVATE_KEY_LENGTH};

pub const PUBLIC_KEY_LENGTH: usize = 33;
pub const SIGNATURE_LENGTH: usize = 65;

pub struct Secp256k1KeyPair {
    inner: FcKeyPair,
    private_key: [u8; PRIVATE_KEY_LENGTH],
}

impl Secp256k1KeyPair {
    pub fn from_private_key(bytes: &[u8]) -> SuiTxResult<Self> {
        let private_key: [u8; PRIVATE_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            SuiTxError::length("secp256k1 private key", PRIVATE_KEY_LENGTH, bytes.len())
        })?;
        // Zero and values at or above the group order are rejected here.
        let sk = <FcPrivateKey as ToFromBytes>::from_bytes(&private_key)
            .map_err(|e| SuiTxError::InvalidKey(format!("secp256k1 private key: {}", e)))?;
        Ok(Self {
            inner: FcKeyPair::from(sk),
            private_key,
        })
    }

    pub fn public(&self) -> Secp256k1PublicKey {
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes.copy_from_slice(self.inner.public().as_bytes());
        Secp256k1PublicKey(bytes)
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.private_key
    }

    pub fn sign(&self, msg: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        let sig = self.inner.sign_recoverable_with_hash::<Sha256>(msg);
        let mut out = [0u8; SIGNATURE_LENGTH];
        out.copy_from_slice(sig.as_bytes());
        out
    }
}

impl PartialEq for Secp256k1KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_key == other.private_key
    }
}

impl Eq for Secp256k1KeyPair {}

impl std::fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("public", &self.public())
            .finish_non_exhaustive()
    }
}

impl SchemeSigner for Secp256k1KeyPair {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Secp256k1
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.public().0.to_vec()
    }

    fn private_key_bytes(&self) -> Vec<u8> {
        self.private_key.to_vec()
    }

    fn sign(&self, msg: &[u8]) -> Vec<u8> {
        Secp256k1KeyPair::sign(self, msg).to_vec()
    }
}

/// Compressed SEC1 public key.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Secp256k1PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl Secp256k1PublicKey {
    /// Length-checked only; curve validity is checked when verifying.
    pub fn from_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
        let arr: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            SuiTxError::length("secp256k1 public key", PUBLIC_KEY_LENGTH, bytes.len())
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for Secp256k1PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secp256k1PublicKey({})", hex::encode(self.0))
    }
}

impl SchemeVerifier for Secp256k1PublicKey {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Secp256k1
    }

    fn key_bytes(&self) -> &[u8] {
        &self.0
    }

    fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        let Ok(sig) = <Secp256k1RecoverableSignature as ToFromBytes>::from_bytes(signature) else {
            return false;
        };
        match sig.recover_with_hash::<Sha256>(msg) {
            Ok(recovered) => recovered.as_bytes() == self.0.as_slice(),
            Err(_) => false,
        }
    }
}
