//! Leaf types for the sui-tx workspace.
//!
//! This crate holds everything below the signature layer: the binary codec, its
//! strictness configuration, fixed-length identities and the Move type/argument model.
//!
//! ## Codec
//!
//! [`bcs`] provides the hand-written [`Serializer`] / [`Deserializer`] pair and the
//! [`BcsEncode`] / [`BcsDecode`] traits every wire type implements:
//!
//! ```
//! use sui_tx_types::{BcsDecode, BcsEncode, ObjectID};
//!
//! let id = ObjectID::from_hex("0x2").unwrap();
//! let bytes = id.to_bcs_bytes();
//! assert_eq!(bytes.len(), 20);
//! assert_eq!(ObjectID::from_bcs_bytes(&bytes).unwrap(), id);
//! ```

pub mod address;
pub mod bcs;
pub mod call_arg;
pub mod config;
pub mod encoding;
pub mod env_utils;
pub mod error;
pub mod hash;
pub mod object;
pub mod type_tag;

// Re-export commonly used types at crate root
pub use address::{AccountAddress, SuiAddress};
pub use bcs::{BcsDecode, BcsEncode, Deserializer, Serializer};
pub use call_arg::{CallArg, ObjectArg, SharedObjectArg};
pub use config::CodecConfig;
pub use error::{SuiTxError, SuiTxResult};
pub use hash::sha3_256;
pub use object::{ObjectDigest, ObjectID, ObjectRef};
pub use type_tag::{StructTag, TypeTag};
