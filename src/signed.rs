//! `SenderSignedData`: an intent message together with the sender's signature.

use serde::{Deserialize, Serialize};
use sui_tx_types::{
    sha3_256, BcsDecode, BcsEncode, Deserializer, ObjectDigest, Serializer, SuiAddress,
    SuiTxResult,
};
use tracing::{debug, info};

use crate::crypto::{Signature, SuiKeyPair};
use crate::intent::IntentMessage;

/// Wire form: `IntentMessage ‖ bytes(signature)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderSignedData {
    pub intent_message: IntentMessage,
    pub tx_signature: Signature,
}

impl SenderSignedData {
    pub fn new(intent_message: IntentMessage, tx_signature: Signature) -> Self {
        Self {
            intent_message,
            tx_signature,
        }
    }

    /// Sign the canonical encoding of `intent_message` with `keypair`.
    ///
    /// The keypair is not required to match the declared sender; a mismatch shows up
    /// when the result is verified.
    pub fn sign(intent_message: IntentMessage, keypair: &SuiKeyPair) -> Self {
        let tx_signature = keypair.sign_message(&intent_message);
        Self::new(intent_message, tx_signature)
    }

    pub fn sender(&self) -> SuiAddress {
        self.intent_message.sender()
    }

    /// SHA3-256 of the encoded intent message. The signature does not contribute.
    pub fn digest(&self) -> ObjectDigest {
        ObjectDigest::new(sha3_256(self.intent_message.to_bcs_bytes()))
    }

    /// Verify the signature over the intent message against the declared sender.
    pub fn verify(&self) -> SuiTxResult<bool> {
        self.tx_signature
            .verify(&self.intent_message, self.intent_message.sender())
    }

    pub fn verifies(&self) -> bool {
        self.verify().unwrap_or(false)
    }

    /// Verify many transactions in parallel; results keep the input order.
    pub fn verify_all(signed: &[SenderSignedData]) -> Vec<SuiTxResult<bool>> {
        use rayon::prelude::*;

        let results: Vec<SuiTxResult<bool>> = signed.par_iter().map(|tx| tx.verify()).collect();
        let valid = results.iter().filter(|r| matches!(r, Ok(true))).count();
        info!(total = signed.len(), valid, "verified signed transactions");
        results
    }
}

impl BcsEncode for SenderSignedData {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.intent_message);
        ser.encode(&self.tx_signature);
    }
}

impl BcsDecode for SenderSignedData {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        let intent_message: IntentMessage = de.decode()?;
        let tx_signature: Signature = de.decode()?;
        debug!(
            sender = %intent_message.sender(),
            scheme = %tx_signature.scheme(),
            "decoded signed transaction"
        );
        Ok(Self {
            intent_message,
            tx_signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SignatureScheme;
    use crate::intent::Intent;
    use crate::transaction::{TransactionData, TransferSui};
    use sui_tx_types::{ObjectID, ObjectRef, SuiTxError};

    const ED_KEYPAIR: &str =
        "ACO/Nk+bHim8j+NOcwAZ34gcnIAevFUl4nKZRbbQmJ0Zmnw+HwARIjNEVWZ3iJmqu8zd7v8BAgMEBQYHCAkKCww=";
    const K1_KEYPAIR: &str =
        "AQP1jy6N6JZ/QEVQ2RNYzYBJAAzz2ZCtL3GOZZt6pRIr3DsfLUxeb3CBkqO0xdbn+AkaKzxNXm9wgZKjtMXW5/gJ";

    fn intent_message(sender: SuiAddress, budget: u64) -> IntentMessage {
        let data = TransactionData::new(
            TransferSui::new(SuiAddress::from_hex("0xabc").unwrap(), Some(100)),
            sender,
            ObjectRef::new(ObjectID::new([3; 20]), 4, ObjectDigest::new([5; 32])),
            1,
            budget,
        );
        IntentMessage::new(Intent::sui_transaction(), data)
    }

    fn signed_by(kp_b64: &str) -> SenderSignedData {
        let kp = SuiKeyPair::from_base64(kp_b64).unwrap();
        SenderSignedData::sign(intent_message(kp.public_key().to_sui_address(), 1000), &kp)
    }

    #[test]
    fn test_sign_then_verify_both_schemes() {
        for (kp, scheme) in [
            (ED_KEYPAIR, SignatureScheme::Ed25519),
            (K1_KEYPAIR, SignatureScheme::Secp256k1),
        ] {
            let signed = signed_by(kp);
            assert_eq!(signed.tx_signature.scheme(), scheme);
            assert_eq!(signed.verify(), Ok(true));

            let bytes = signed.to_bcs_bytes();
            let decoded = SenderSignedData::from_bcs_bytes(&bytes).unwrap();
            assert_eq!(decoded, signed);
            assert!(decoded.verifies());
        }
    }

    #[test]
    fn test_digest_ignores_signature() {
        let ed = signed_by(ED_KEYPAIR);
        let k1 = SuiKeyPair::from_base64(K1_KEYPAIR).unwrap();
        let resigned = SenderSignedData::sign(ed.intent_message.clone(), &k1);
        assert_eq!(ed.digest(), resigned.digest());
        assert_eq!(
            ed.digest(),
            ObjectDigest::new(sha3_256(ed.intent_message.to_bcs_bytes()))
        );
    }

    #[test]
    fn test_tampered_payload_fails() {
        let mut signed = signed_by(ED_KEYPAIR);
        signed.intent_message.value.gas_budget += 1;
        assert_eq!(signed.verify(), Ok(false));

        let mut signed = signed_by(K1_KEYPAIR);
        signed.intent_message.intent = Intent::new(1, 0, 0);
        assert_eq!(signed.verify(), Ok(false));
    }

    #[test]
    fn test_wrong_sender_is_an_error() {
        let kp = SuiKeyPair::from_base64(ED_KEYPAIR).unwrap();
        let stranger = SuiAddress::from_hex("0x1").unwrap();
        let signed = SenderSignedData::sign(intent_message(stranger, 1000), &kp);
        assert!(matches!(
            signed.verify(),
            Err(SuiTxError::SenderMismatch { declared, .. }) if declared == stranger
        ));
        assert!(!signed.verifies());
    }

    #[test]
    fn test_verify_all_keeps_order() {
        let good = signed_by(ED_KEYPAIR);
        let mut bad = signed_by(K1_KEYPAIR);
        bad.intent_message.value.gas_price = 2;
        let results = SenderSignedData::verify_all(&[good.clone(), bad, good]);
        assert_eq!(results, vec![Ok(true), Ok(false), Ok(true)]);
        assert!(SenderSignedData::verify_all(&[]).is_empty());
    }

    #[test]
    fn test_json_shape() {
        let signed = signed_by(ED_KEYPAIR);
        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["tx_signature"], signed.tx_signature.base64());
        assert_eq!(json["intent_message"]["intent"]["scope"], 0);
        assert_eq!(
            serde_json::from_value::<SenderSignedData>(json).unwrap(),
            signed
        );
    }
}
