//! Fixed-length account identities.
//!
//! Addresses are 20-byte values. They are often written in different forms:
//! - Short form: "0x2"
//! - Full form: "0x0000000000000000000000000000000000000002"
//! - Without prefix: "2"
//!
//! The hex constructors accept all of them: an optional `0x`/`0X` prefix is stripped and
//! the remainder is zero-left-padded to 40 characters before decoding. Short input is
//! therefore zero-extended rather than rejected. Input longer than 40 characters fails.
//!
//! On the wire an address is its 20 raw bytes with no length prefix.

use std::fmt;
use std::str::FromStr;

use crate::bcs::{BcsDecode, BcsEncode, Deserializer, Serializer};
use crate::encoding::{hex_with_prefix, pad_hex, parse_hex_bytes};
use crate::error::{SuiTxError, SuiTxResult};
use crate::hash::sha3_256;

pub const ADDRESS_LENGTH: usize = 20;

macro_rules! fixed_address {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name([u8; ADDRESS_LENGTH]);

        impl $name {
            pub const LENGTH: usize = ADDRESS_LENGTH;
            pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

            pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
                Self(bytes)
            }

            /// Exactly 20 raw bytes.
            pub fn from_bytes(bytes: &[u8]) -> SuiTxResult<Self> {
                let arr: [u8; ADDRESS_LENGTH] = bytes
                    .try_into()
                    .map_err(|_| SuiTxError::length($what, ADDRESS_LENGTH, bytes.len()))?;
                Ok(Self(arr))
            }

            /// Lenient hex: optional prefix, zero-extended to 40 characters.
            pub fn from_hex(hex_str: &str) -> SuiTxResult<Self> {
                let padded = pad_hex(hex_str, ADDRESS_LENGTH * 2);
                let bytes = parse_hex_bytes(&padded, $what)?;
                Self::from_bytes(&bytes)
            }

            /// `0x` followed by 40 lowercase hex characters.
            pub fn hex(&self) -> String {
                hex_with_prefix(&self.0)
            }

            pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
                &self.0
            }

            pub fn to_vec(&self) -> Vec<u8> {
                self.0.to_vec()
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; ADDRESS_LENGTH]> for $name {
            fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = SuiTxError;

            fn try_from(bytes: &[u8]) -> SuiTxResult<Self> {
                Self::from_bytes(bytes)
            }
        }

        impl FromStr for $name {
            type Err = SuiTxError;

            fn from_str(s: &str) -> SuiTxResult<Self> {
                Self::from_hex(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.hex())
            }
        }

        impl BcsEncode for $name {
            fn encode(&self, ser: &mut Serializer) {
                ser.fixed_bytes(&self.0);
            }
        }

        impl BcsDecode for $name {
            fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
                Self::from_bytes(&de.fixed_bytes(ADDRESS_LENGTH)?)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_address!(
    /// A Move account address.
    AccountAddress,
    "address"
);

fixed_address!(
    /// A Sui account address, derived from a scheme-tagged public key.
    SuiAddress,
    "address"
);

impl SuiAddress {
    /// First 20 bytes of `sha3_256(flag ‖ public_key)`.
    pub fn from_public_key(flag: u8, public_key: &[u8]) -> Self {
        let mut preimage = Vec::with_capacity(1 + public_key.len());
        preimage.push(flag);
        preimage.extend_from_slice(public_key);
        let digest = sha3_256(&preimage);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&digest[..ADDRESS_LENGTH]);
        Self(bytes)
    }
}

impl From<AccountAddress> for SuiAddress {
    fn from(addr: AccountAddress) -> Self {
        Self(addr.0)
    }
}

impl From<SuiAddress> for AccountAddress {
    fn from(addr: SuiAddress) -> Self {
        Self(addr.0)
    }
}
