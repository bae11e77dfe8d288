//! Keypair corpus and the key/signature envelope through the public API.

mod common;

use common::{assert_error_contains, load_vectors};
use sui_tx_sdk::crypto::{verify_batch_empty_fail_different_msgs, Ed25519SuiSignature};
use sui_tx_sdk::{BcsDecode, PublicKey, Signature, SignatureScheme, SuiKeyPair, SuiTxError};
use sui_tx_types::encoding::{base64_decode, base64_encode};

#[test]
fn test_keypair_vectors() {
    for v in load_vectors().key_pairs {
        let keypair = SuiKeyPair::from_base64(&v.serialization).unwrap();
        assert_eq!(keypair.scheme().flag(), v.scheme);
        assert_eq!(keypair.base64(), v.serialization);

        let public_key = keypair.public_key();
        assert_eq!(public_key.base64(), v.public_key);
        assert_eq!(public_key.to_sui_address().to_string(), v.address);
        assert_eq!(PublicKey::from_base64(&v.public_key).unwrap(), public_key);
    }
}

#[test]
fn test_keypair_debug_hides_private_key() {
    for v in load_vectors().key_pairs {
        let keypair = SuiKeyPair::from_base64(&v.serialization).unwrap();
        let private_hex = hex::encode(keypair.private_key_bytes());
        let debug = format!("{:?}", keypair);
        assert!(!debug.contains(&private_hex), "{}", debug);
    }
}

#[test]
fn test_signatures_from_both_schemes() {
    let vectors = load_vectors();
    let message = b"cross-scheme";
    let keypairs: Vec<SuiKeyPair> = vectors
        .key_pairs
        .iter()
        .map(|v| SuiKeyPair::from_base64(&v.serialization).unwrap())
        .collect();
    let signatures: Vec<Signature> = keypairs.iter().map(|kp| kp.sign(message)).collect();

    assert_eq!(signatures[0].scheme(), SignatureScheme::Ed25519);
    assert_eq!(signatures[1].scheme(), SignatureScheme::Secp256k1);
    assert_eq!(signatures[0].as_bytes().len(), 97);
    assert_eq!(signatures[1].as_bytes().len(), 99);

    // A signature embeds its own public key, which verifies it.
    for (kp, sig) in keypairs.iter().zip(&signatures) {
        assert_eq!(sig.public_key(), kp.public_key());
        assert!(sig.public_key().verify(message, sig.signature_bytes()));
    }

    // Keys are not interchangeable across messages.
    let pks: Vec<PublicKey> = keypairs.iter().map(|kp| kp.public_key()).collect();
    let raw: Vec<&[u8]> = signatures.iter().map(|s| s.signature_bytes()).collect();
    assert!(verify_batch_empty_fail_different_msgs(&[message, message], &pks, &raw).unwrap());
    let other: &[u8] = b"other";
    assert!(!verify_batch_empty_fail_different_msgs(&[&message[..], other], &pks, &raw).unwrap());
}

#[test]
fn test_standalone_signature_wrapper() {
    let vectors = load_vectors();
    let keypair = SuiKeyPair::from_base64(&vectors.key_pairs[0].serialization).unwrap();
    let Signature::Ed25519(sig) = keypair.sign(b"standalone") else {
        panic!("expected an ed25519 signature");
    };
    let decoded = Ed25519SuiSignature::from_bcs_bytes(sig.as_bytes()).unwrap();
    assert_eq!(decoded, sig);
    assert_eq!(decoded.public_key().as_bytes(), &keypair.public_key().as_bytes()[..]);
}

#[test]
fn test_envelope_errors() {
    let vectors = load_vectors();
    let mut raw = base64_decode(&vectors.key_pairs[1].public_key, "test").unwrap();
    raw[0] = 0x03;
    assert_eq!(
        PublicKey::from_base64(&base64_encode(&raw)),
        Err(SuiTxError::SchemeMismatch(0x03))
    );

    let err = SuiKeyPair::from_base64("not base64!").unwrap_err();
    assert_error_contains(err, "keypair", "bad base64 keypair");

    // An ed25519 keypair with a secp256k1 flag has the wrong length.
    let mut raw = base64_decode(&vectors.key_pairs[0].serialization, "test").unwrap();
    raw[0] = SignatureScheme::Secp256k1.flag();
    assert_eq!(
        SuiKeyPair::from_base64(&base64_encode(&raw)),
        Err(SuiTxError::length("keypair", 66, 65))
    );
}
