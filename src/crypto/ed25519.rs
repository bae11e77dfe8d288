//! Ed25519 backend. Signs the raw message.

use fastcrypto::ed25519::{
    Ed25519KeyPair as FcKeyPair, Ed25519PrivateKey as FcPrivateKey,
    Ed25519PublicKey as FcPublicKey, Ed25519Signature as FcSignature,
};
use fastcrypto::traits::{KeyPair, Signer, ToFromBytes, VerifyingKey};
use sui_tx_types::{SuiTxError, SuiTxResult};

use super::{SchemeSigner, SchemeVerifier, SignatureScheme, PRIVATE_KEY_LENGTH};

pub const PUBLIC_KEY_LENGTH: usize = 32;
pub const SIGNATURE_LENGTH: usize = 64;

pub struct Ed25519KeyPair {
    inner: FcKeyPair,
    private_key: [u8; PRIVATE_KEY_LENGTH],
}

impl Ed25519KeyPair {
    pub fn from_private_key(bytes: &[u8]) -> SuiTxResult<Self> {
        let private_key: [u8; PRIVATE_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| SuiTxError::length("ed25519 private key", PRIVATE_KEY_LENGTH, bytes.len()))?;
        let sk = <FcPrivateKey as ToFromBytes>::from_bytes(&private_key)
            .map_err(|e| SuiTxError::InvalidKey(format!("ed25519 private key: {}", e)))?;
        Ok(Self {
            inner: FcKeyPair::from(sk),
            private_key,
        })
    }

    pub fn public(&self) -> Ed25519PublicKey {
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes.copy_from_slice(self.inner.public().as_bytes());
        Ed25519PublicKey(bytes)
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.private_key
    }

    pub fn sign(&self, msg: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        let sig: FcSignature = Signer::sign(&self.inner, msg);
        let mut out = [0u8; SIGNATURE_LENGTH];
        out.copy_from_slice(sig.as_bytes());
        out
    }
}

impl PartialEq for Ed25519KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_key == other.private_key
    }
}

impl Eq for Ed25519KeyPair {}

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("public", &self.public())
            .finish_non_exhaustive()
    }
}

impl SchemeSigner for Ed25519KeyPair {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.public().0.to_vec()
    }

    fn private_key_bytes(&self) -> Vec<u8> {
        self.private_key.to_vec()
    }

    fn sign(&self, msg: &[u8]) -> Vec<u8> {
        Ed25519KeyPair::sign(self, msg).to_vec()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl Ed25519PublicKey {
    /// Length-checked only; curve validity is checked when verifying.
    pub fn from_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
        let arr: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| SuiTxError::length("ed25519 public key", PUBLIC_KEY_LENGTH, bytes.len()))?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for Ed25519PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519PublicKey({})", hex::encode(self.0))
    }
}

impl SchemeVerifier for Ed25519PublicKey {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn key_bytes(&self) -> &[u8] {
        &self.0
    }

    fn verify(&self, msg: &[u8], signature: &[u8]) -> bool {
        let Ok(public_key) = <FcPublicKey as ToFromBytes>::from_bytes(&self.0) else {
            return false;
        };
        let Ok(signature) = <FcSignature as ToFromBytes>::from_bytes(signature) else {
            return false;
        };
        public_key.verify(msg, &signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test vector 1 from RFC 8032.
    const RFC_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const RFC_SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    fn rfc_keypair() -> Ed25519KeyPair {
        Ed25519KeyPair::from_private_key(&hex::decode(RFC_SECRET).unwrap()).unwrap()
    }

    #[test]
    fn test_rfc8032_empty_message() {
        let kp = rfc_keypair();
        assert_eq!(hex::encode(kp.public().as_bytes()), RFC_PUBLIC);
        assert_eq!(hex::encode(kp.sign(b"")), RFC_SIGNATURE);
        assert!(kp.public().verify(b"", &kp.sign(b"")));
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let kp = rfc_keypair();
        let mut sig = kp.sign(b"payload");
        assert!(kp.public().verify(b"payload", &sig));
        assert!(!kp.public().verify(b"payloae", &sig));
        sig[10] ^= 0x01;
        assert!(!kp.public().verify(b"payload", &sig));
        // Wrong length is just a failed verification.
        assert!(!kp.public().verify(b"payload", &sig[..63]));
    }

    #[test]
    fn test_key_lengths() {
        assert_eq!(
            Ed25519KeyPair::from_private_key(&[0u8; 31]).unwrap_err(),
            SuiTxError::length("ed25519 private key", 32, 31)
        );
        assert!(matches!(
            Ed25519PublicKey::from_bytes(&[0u8; 33]),
            Err(SuiTxError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_capability_traits() {
        let kp = rfc_keypair();
        let signer: &dyn SchemeSigner = &kp;
        assert_eq!(signer.scheme(), SignatureScheme::Ed25519);
        assert_eq!(signer.private_key_bytes(), hex::decode(RFC_SECRET).unwrap());
        let sig = signer.sign(b"msg");
        let verifier: &dyn SchemeVerifier = &kp.public();
        assert_eq!(verifier.key_bytes(), signer.public_key_bytes().as_slice());
        assert!(verifier.verify(b"msg", &sig));
    }
}
