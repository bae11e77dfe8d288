//! Sui Transaction SDK
//!
//! Build, encode, sign and verify Sui transactions offline:
//!
//! - **Data model**: [`transaction`] payloads, [`TransactionKind`] and [`TransactionData`]
//! - **Intent signing**: [`IntentMessage`] and [`SenderSignedData`]
//! - **Keys and signatures**: scheme-tagged [`crypto`] envelope over Ed25519 and secp256k1
//!
//! Primitive types and the canonical binary codec live in [`sui_tx_types`] and are
//! re-exported here.

#![allow(clippy::result_large_err)]

pub mod crypto;
pub mod intent;
pub mod signed;
pub mod transaction;

pub use crypto::{PublicKey, Signature, SignatureScheme, SuiKeyPair};
pub use intent::{Intent, IntentMessage};
pub use signed::SenderSignedData;
pub use transaction::{SingleTransactionKind, TransactionData, TransactionKind};

pub use sui_tx_types::{
    sha3_256, AccountAddress, BcsDecode, BcsEncode, CallArg, CodecConfig, Deserializer,
    ObjectArg, ObjectDigest, ObjectID, ObjectRef, Serializer, SharedObjectArg, StructTag,
    SuiAddress, SuiTxError, SuiTxResult, TypeTag,
};
