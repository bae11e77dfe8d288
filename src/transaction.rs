//! Transaction payloads and `TransactionData`.
//!
//! [`SingleTransactionKind`] is a closed union of eight payloads with wire tags 0..7;
//! [`TransactionKind`] wraps either one of them or a batch. Every payload struct
//! converts into both with `From`, so callers pick the shape explicitly:
//!
//! ```
//! use sui_tx_sdk::transaction::{TransactionKind, TransferSui};
//! use sui_tx_types::SuiAddress;
//!
//! let recipient = SuiAddress::from_hex("0x2").unwrap();
//! let single = TransactionKind::single(TransferSui::new(recipient, None));
//! let batch = TransactionKind::batch(vec![TransferSui::new(recipient, Some(5)).into()]);
//! assert!(matches!(single, TransactionKind::Single(_)));
//! assert!(matches!(batch, TransactionKind::Batch(_)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use sui_tx_types::encoding::base64_seq;
use sui_tx_types::{
    BcsDecode, BcsEncode, CallArg, Deserializer, ObjectRef, Serializer, SuiAddress, SuiTxError,
    SuiTxResult, TypeTag,
};

// ============================================================================
// Payloads
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferObject {
    pub recipient: SuiAddress,
    pub object_ref: ObjectRef,
}

impl TransferObject {
    pub fn new(recipient: SuiAddress, object_ref: ObjectRef) -> Self {
        Self {
            recipient,
            object_ref,
        }
    }
}

impl BcsEncode for TransferObject {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.recipient);
        ser.encode(&self.object_ref);
    }
}

impl BcsDecode for TransferObject {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            recipient: de.decode()?,
            object_ref: de.decode()?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveModulePublish {
    #[serde(with = "base64_seq")]
    pub modules: Vec<Vec<u8>>,
}

impl MoveModulePublish {
    pub fn new(modules: Vec<Vec<u8>>) -> Self {
        Self { modules }
    }
}

impl BcsEncode for MoveModulePublish {
    fn encode(&self, ser: &mut Serializer) {
        ser.sequence(&self.modules, |ser, module| ser.bytes(module));
    }
}

impl BcsDecode for MoveModulePublish {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            modules: de.sequence(|de| de.bytes())?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCall {
    pub package: ObjectRef,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<CallArg>,
}

impl MoveCall {
    pub fn new(
        package: ObjectRef,
        module: impl Into<String>,
        function: impl Into<String>,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<CallArg>,
    ) -> Self {
        Self {
            package,
            module: module.into(),
            function: function.into(),
            type_arguments,
            arguments,
        }
    }
}

impl BcsEncode for MoveCall {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.package);
        ser.str(&self.module);
        ser.str(&self.function);
        ser.encode(&self.type_arguments);
        ser.encode(&self.arguments);
    }
}

impl BcsDecode for MoveCall {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            package: de.decode()?,
            module: de.str()?,
            function: de.str()?,
            type_arguments: de.decode()?,
            arguments: de.decode()?,
        })
    }
}

/// Transfer SUI to `recipient`. `amount: None` transfers the full balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSui {
    pub recipient: SuiAddress,
    pub amount: Option<u64>,
}

impl TransferSui {
    pub fn new(recipient: SuiAddress, amount: Option<u64>) -> Self {
        Self { recipient, amount }
    }
}

impl BcsEncode for TransferSui {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.recipient);
        ser.encode(&self.amount);
    }
}

impl BcsDecode for TransferSui {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            recipient: de.decode()?,
            amount: de.decode()?,
        })
    }
}

/// Fields shared by `Pay` and `PaySui`, before the recipient/amount check.
#[derive(Deserialize)]
struct PayFields {
    coins: Vec<ObjectRef>,
    recipients: Vec<SuiAddress>,
    amounts: Vec<u64>,
}

// Pay and PaySui have identical layout and the same construction rule:
// recipients and amounts are parallel lists.
macro_rules! pay_payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "PayFields")]
        pub struct $name {
            coins: Vec<ObjectRef>,
            recipients: Vec<SuiAddress>,
            amounts: Vec<u64>,
        }

        impl $name {
            /// Fails with `ShapeMismatch` unless `recipients.len() == amounts.len()`.
            pub fn new(
                coins: Vec<ObjectRef>,
                recipients: Vec<SuiAddress>,
                amounts: Vec<u64>,
            ) -> SuiTxResult<Self> {
                if recipients.len() != amounts.len() {
                    return Err(SuiTxError::ShapeMismatch(format!(
                        "{}: expected same count of recipients ({}) and amounts ({})",
                        stringify!($name),
                        recipients.len(),
                        amounts.len()
                    )));
                }
                Ok(Self {
                    coins,
                    recipients,
                    amounts,
                })
            }

            pub fn coins(&self) -> &[ObjectRef] {
                &self.coins
            }

            pub fn recipients(&self) -> &[SuiAddress] {
                &self.recipients
            }

            pub fn amounts(&self) -> &[u64] {
                &self.amounts
            }
        }

        impl TryFrom<PayFields> for $name {
            type Error = SuiTxError;

            fn try_from(fields: PayFields) -> SuiTxResult<Self> {
                Self::new(fields.coins, fields.recipients, fields.amounts)
            }
        }

        impl BcsEncode for $name {
            fn encode(&self, ser: &mut Serializer) {
                ser.encode(&self.coins);
                ser.encode(&self.recipients);
                ser.encode(&self.amounts);
            }
        }

        impl BcsDecode for $name {
            fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
                let coins = de.decode()?;
                let recipients = de.decode()?;
                let amounts = de.decode()?;
                Self::new(coins, recipients, amounts)
            }
        }
    };
}

pay_payload!(
    /// Split `coins` and send `amounts[i]` to `recipients[i]`.
    Pay
);

pay_payload!(
    /// Like `Pay`, with the first coin also covering gas.
    PaySui
);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAllSui {
    pub coins: Vec<ObjectRef>,
    pub recipient: SuiAddress,
}

impl PayAllSui {
    pub fn new(coins: Vec<ObjectRef>, recipient: SuiAddress) -> Self {
        Self { coins, recipient }
    }
}

impl BcsEncode for PayAllSui {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.coins);
        ser.encode(&self.recipient);
    }
}

impl BcsDecode for PayAllSui {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            coins: de.decode()?,
            recipient: de.decode()?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEpoch {
    pub epoch: u64,
    pub storage_charge: u64,
    pub computation_charge: u64,
    pub storage_rebate: u64,
}

impl BcsEncode for ChangeEpoch {
    fn encode(&self, ser: &mut Serializer) {
        ser.u64(self.epoch);
        ser.u64(self.storage_charge);
        ser.u64(self.computation_charge);
        ser.u64(self.storage_rebate);
    }
}

impl BcsDecode for ChangeEpoch {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            epoch: de.u64()?,
            storage_charge: de.u64()?,
            computation_charge: de.u64()?,
            storage_rebate: de.u64()?,
        })
    }
}

// ============================================================================
// Kinds
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SingleTransactionKind {
    TransferObject(TransferObject),
    Publish(MoveModulePublish),
    Call(MoveCall),
    TransferSui(TransferSui),
    Pay(Pay),
    PaySui(PaySui),
    PayAllSui(PayAllSui),
    ChangeEpoch(ChangeEpoch),
}

impl SingleTransactionKind {
    pub fn variant_index(&self) -> u32 {
        match self {
            SingleTransactionKind::TransferObject(_) => 0,
            SingleTransactionKind::Publish(_) => 1,
            SingleTransactionKind::Call(_) => 2,
            SingleTransactionKind::TransferSui(_) => 3,
            SingleTransactionKind::Pay(_) => 4,
            SingleTransactionKind::PaySui(_) => 5,
            SingleTransactionKind::PayAllSui(_) => 6,
            SingleTransactionKind::ChangeEpoch(_) => 7,
        }
    }

    /// Human-readable name of the payload.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SingleTransactionKind::TransferObject(_) => "Transfer Object",
            SingleTransactionKind::Publish(_) => "Publish",
            SingleTransactionKind::Call(_) => "Call",
            SingleTransactionKind::TransferSui(_) => "Transfer SUI",
            SingleTransactionKind::Pay(_) => "Pay",
            SingleTransactionKind::PaySui(_) => "Pay SUI",
            SingleTransactionKind::PayAllSui(_) => "Pay all SUI",
            SingleTransactionKind::ChangeEpoch(_) => "Epoch Change",
        }
    }
}

impl fmt::Display for SingleTransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}

impl BcsEncode for SingleTransactionKind {
    fn encode(&self, ser: &mut Serializer) {
        ser.uleb128(self.variant_index());
        match self {
            SingleTransactionKind::TransferObject(tx) => tx.encode(ser),
            SingleTransactionKind::Publish(tx) => tx.encode(ser),
            SingleTransactionKind::Call(tx) => tx.encode(ser),
            SingleTransactionKind::TransferSui(tx) => tx.encode(ser),
            SingleTransactionKind::Pay(tx) => tx.encode(ser),
            SingleTransactionKind::PaySui(tx) => tx.encode(ser),
            SingleTransactionKind::PayAllSui(tx) => tx.encode(ser),
            SingleTransactionKind::ChangeEpoch(tx) => tx.encode(ser),
        }
    }
}

impl BcsDecode for SingleTransactionKind {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(match de.uleb128()? {
            0 => SingleTransactionKind::TransferObject(de.decode()?),
            1 => SingleTransactionKind::Publish(de.decode()?),
            2 => SingleTransactionKind::Call(de.decode()?),
            3 => SingleTransactionKind::TransferSui(de.decode()?),
            4 => SingleTransactionKind::Pay(de.decode()?),
            5 => SingleTransactionKind::PaySui(de.decode()?),
            6 => SingleTransactionKind::PayAllSui(de.decode()?),
            7 => SingleTransactionKind::ChangeEpoch(de.decode()?),
            tag => {
                return Err(SuiTxError::UnsupportedVariant {
                    type_name: "SingleTransactionKind",
                    tag,
                })
            }
        })
    }
}

macro_rules! impl_into_kind {
    ($($payload:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for SingleTransactionKind {
                fn from(tx: $payload) -> Self {
                    SingleTransactionKind::$variant(tx)
                }
            }

            impl From<$payload> for TransactionKind {
                fn from(tx: $payload) -> Self {
                    TransactionKind::Single(tx.into())
                }
            }
        )*
    };
}

impl_into_kind!(
    TransferObject => TransferObject,
    MoveModulePublish => Publish,
    MoveCall => Call,
    TransferSui => TransferSui,
    Pay => Pay,
    PaySui => PaySui,
    PayAllSui => PayAllSui,
    ChangeEpoch => ChangeEpoch,
);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Single(SingleTransactionKind),
    Batch(Vec<SingleTransactionKind>),
}

impl TransactionKind {
    pub fn single(kind: impl Into<SingleTransactionKind>) -> Self {
        TransactionKind::Single(kind.into())
    }

    pub fn batch(kinds: Vec<SingleTransactionKind>) -> Self {
        TransactionKind::Batch(kinds)
    }

    pub fn variant_index(&self) -> u32 {
        match self {
            TransactionKind::Single(_) => 0,
            TransactionKind::Batch(_) => 1,
        }
    }

    /// The payloads in order; one element for `Single`.
    pub fn kinds(&self) -> &[SingleTransactionKind] {
        match self {
            TransactionKind::Single(kind) => std::slice::from_ref(kind),
            TransactionKind::Batch(kinds) => kinds,
        }
    }
}

impl From<SingleTransactionKind> for TransactionKind {
    fn from(kind: SingleTransactionKind) -> Self {
        TransactionKind::Single(kind)
    }
}

impl From<Vec<SingleTransactionKind>> for TransactionKind {
    fn from(kinds: Vec<SingleTransactionKind>) -> Self {
        TransactionKind::Batch(kinds)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Single(kind) => write!(f, "{}", kind),
            TransactionKind::Batch(kinds) => {
                f.write_str("Batch [")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", kind)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl BcsEncode for TransactionKind {
    fn encode(&self, ser: &mut Serializer) {
        ser.uleb128(self.variant_index());
        match self {
            TransactionKind::Single(kind) => kind.encode(ser),
            TransactionKind::Batch(kinds) => kinds.encode(ser),
        }
    }
}

impl BcsDecode for TransactionKind {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        match de.uleb128()? {
            0 => Ok(TransactionKind::Single(de.decode()?)),
            1 => Ok(TransactionKind::Batch(de.decode()?)),
            tag => Err(SuiTxError::UnsupportedVariant {
                type_name: "TransactionKind",
                tag,
            }),
        }
    }
}

// ============================================================================
// Transaction data
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    pub kind: TransactionKind,
    pub sender: SuiAddress,
    pub gas_payment: ObjectRef,
    pub gas_price: u64,
    pub gas_budget: u64,
}

impl TransactionData {
    pub fn new(
        kind: impl Into<TransactionKind>,
        sender: SuiAddress,
        gas_payment: ObjectRef,
        gas_price: u64,
        gas_budget: u64,
    ) -> Self {
        Self {
            kind: kind.into(),
            sender,
            gas_payment,
            gas_price,
            gas_budget,
        }
    }
}

impl BcsEncode for TransactionData {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.kind);
        ser.encode(&self.sender);
        ser.encode(&self.gas_payment);
        ser.u64(self.gas_price);
        ser.u64(self.gas_budget);
    }
}

impl BcsDecode for TransactionData {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            kind: de.decode()?,
            sender: de.decode()?,
            gas_payment: de.decode()?,
            gas_price: de.u64()?,
            gas_budget: de.u64()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sui_tx_types::{ObjectDigest, ObjectID};

    fn addr(hex: &str) -> SuiAddress {
        SuiAddress::from_hex(hex).unwrap()
    }

    fn coin(seq: u64) -> ObjectRef {
        ObjectRef::new(
            ObjectID::from_hex("0x76a3863d90c99fc89cc82c1072f5887edccf057d").unwrap(),
            seq,
            ObjectDigest::new([seq as u8; 32]),
        )
    }

    #[test]
    fn test_pay_rejects_mismatched_lengths() {
        let err = Pay::new(vec![coin(1)], vec![addr("0x1"), addr("0x2")], vec![5]).unwrap_err();
        assert!(matches!(err, SuiTxError::ShapeMismatch(_)));
        assert!(err.to_string().contains("Pay"));
        assert!(matches!(
            PaySui::new(vec![], vec![], vec![1]),
            Err(SuiTxError::ShapeMismatch(_))
        ));
        assert!(Pay::new(vec![], vec![], vec![]).is_ok());
    }

    #[test]
    fn test_pay_rejected_on_decode_and_json() {
        // Hand-assemble a Pay body with one recipient and two amounts.
        let mut ser = Serializer::new();
        ser.encode(&vec![coin(1)]);
        ser.encode(&vec![addr("0x1")]);
        ser.encode(&vec![1u64, 2u64]);
        assert!(matches!(
            Pay::from_bcs_bytes(ser.output()),
            Err(SuiTxError::ShapeMismatch(_))
        ));

        let json = serde_json::json!({
            "coins": [],
            "recipients": ["0x1"],
            "amounts": []
        });
        assert!(serde_json::from_value::<PaySui>(json).is_err());
    }

    #[test]
    fn test_transfer_sui_presence_byte() {
        let with_amount = TransferSui::new(addr("0x1"), Some(7)).to_bcs_bytes();
        assert_eq!(with_amount.len(), 20 + 1 + 8);
        assert_eq!(with_amount[20], 1);
        assert_eq!(&with_amount[21..], &7u64.to_le_bytes());

        let full_balance = TransferSui::new(addr("0x1"), None).to_bcs_bytes();
        assert_eq!(full_balance.len(), 21);
        assert_eq!(full_balance[20], 0);
    }

    #[test]
    fn test_kind_tags_and_names() {
        let kinds: Vec<SingleTransactionKind> = vec![
            TransferObject::new(addr("0x1"), coin(1)).into(),
            MoveModulePublish::new(vec![vec![0xa1, 0x1c]]).into(),
            MoveCall::new(coin(2), "coin", "split", vec![TypeTag::U64], vec![]).into(),
            TransferSui::new(addr("0x1"), None).into(),
            Pay::new(vec![coin(3)], vec![addr("0x1")], vec![1]).unwrap().into(),
            PaySui::new(vec![coin(4)], vec![addr("0x1")], vec![1]).unwrap().into(),
            PayAllSui::new(vec![coin(5)], addr("0x1")).into(),
            ChangeEpoch {
                epoch: 1,
                storage_charge: 2,
                computation_charge: 3,
                storage_rebate: 4,
            }
            .into(),
        ];
        let names = [
            "Transfer Object",
            "Publish",
            "Call",
            "Transfer SUI",
            "Pay",
            "Pay SUI",
            "Pay all SUI",
            "Epoch Change",
        ];
        for (i, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.variant_index(), i as u32);
            assert_eq!(kind.kind_name(), names[i]);
            let bytes = kind.to_bcs_bytes();
            assert_eq!(bytes[0], i as u8);
            assert_eq!(SingleTransactionKind::from_bcs_bytes(&bytes).unwrap(), *kind);
        }

        let batch = TransactionKind::batch(kinds.clone());
        let bytes = batch.to_bcs_bytes();
        assert_eq!(&bytes[..2], &[1, 8]);
        assert_eq!(TransactionKind::from_bcs_bytes(&bytes).unwrap(), batch);
        assert_eq!(batch.kinds().len(), 8);
    }

    #[test]
    fn test_unknown_kind_tags() {
        assert_eq!(
            SingleTransactionKind::from_bcs_bytes(&[8]),
            Err(SuiTxError::UnsupportedVariant {
                type_name: "SingleTransactionKind",
                tag: 8
            })
        );
        assert!(matches!(
            TransactionKind::from_bcs_bytes(&[2]),
            Err(SuiTxError::UnsupportedVariant { tag: 2, .. })
        ));
    }

    #[test]
    fn test_transaction_data_known_encoding() {
        let data = TransactionData::new(
            TransferObject::new(
                addr("0xf7c6cd8a54d4b0b2aa75e0c3a5407027d11fd6b8"),
                ObjectRef::new(
                    ObjectID::from_hex("0x76a3863d90c99fc89cc82c1072f5887edccf057d").unwrap(),
                    1823742269753106181,
                    ObjectDigest::from_base64("DPnePK5If6FrZzlp2QOB1KLl2qlNCeZ3DSehQ5MQzQ4=")
                        .unwrap(),
                ),
            ),
            addr("0x773d761f2c9d18de19bd3b3484cab75abd134ae4"),
            ObjectRef::new(
                ObjectID::from_hex("0x509c8a306900dc2d6ddfa8e65e93d9adcffa943e").unwrap(),
                2861011113536544275,
                ObjectDigest::from_base64("rXtBmHvhhqAhzw4ZH0HnrNaoOiGlOIwDeWmH4GHUgnE=").unwrap(),
            ),
            1,
            10000,
        );
        let expected = "AAD3xs2KVNSwsqp14MOlQHAn0R/WuHajhj2QyZ/InMgsEHL1iH7czwV9BZ9/hu47TxkgDPnePK5If6FrZzlp2QOB1KLl2qlNCeZ3DSehQ5MQzQ53PXYfLJ0Y3hm9OzSEyrdavRNK5FCcijBpANwtbd+o5l6T2a3P+pQ+E17KEHNatCcgrXtBmHvhhqAhzw4ZH0HnrNaoOiGlOIwDeWmH4GHUgnEBAAAAAAAAABAnAAAAAAAA";
        assert_eq!(
            sui_tx_types::encoding::base64_encode(&data.to_bcs_bytes()),
            expected
        );
        let decoded = TransactionData::from_bcs_bytes(
            &sui_tx_types::encoding::base64_decode(expected, "tx data").unwrap(),
        )
        .unwrap();
        assert_eq!(decoded, data);
    }
}
