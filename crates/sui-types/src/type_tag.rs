//! Move type tags.
//!
//! `Signer` and `Vector` exist so they can be built, printed and encoded, but their
//! tags are not decodable: reading tag 5 or 6 fails with
//! [`SuiTxError::UnsupportedVariant`] before any payload byte is consumed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::address::AccountAddress;
use crate::bcs::{BcsDecode, BcsEncode, Deserializer, Serializer};
use crate::error::{SuiTxError, SuiTxResult};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(StructTag),
}

// Zero-payload variants, keyed by wire tag.
const PRIMITIVES: [(u32, TypeTag, &str); 6] = [
    (0, TypeTag::Bool, "bool"),
    (1, TypeTag::U8, "u8"),
    (2, TypeTag::U64, "u64"),
    (3, TypeTag::U128, "u128"),
    (4, TypeTag::Address, "address"),
    (5, TypeTag::Signer, "signer"),
];

const VECTOR_TAG: u32 = 6;
const STRUCT_TAG: u32 = 7;

impl TypeTag {
    pub fn variant_index(&self) -> u32 {
        match self {
            TypeTag::Vector(_) => VECTOR_TAG,
            TypeTag::Struct(_) => STRUCT_TAG,
            primitive => PRIMITIVES
                .iter()
                .find(|(_, tag, _)| tag == primitive)
                .map(|(index, _, _)| *index)
                .unwrap_or_default(),
        }
    }

    fn primitive_name(&self) -> Option<&'static str> {
        PRIMITIVES
            .iter()
            .find(|(_, tag, _)| tag == self)
            .map(|(_, _, name)| *name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Vector(inner) => write!(f, "vector<{}>", inner),
            TypeTag::Struct(tag) => write!(f, "{}", tag),
            primitive => f.write_str(primitive.primitive_name().unwrap_or_default()),
        }
    }
}

/// Parse `bool|u8|u64|u128|address|signer`, `vector<T>`, or a non-generic struct tag.
impl FromStr for TypeTag {
    type Err = SuiTxError;

    fn from_str(s: &str) -> SuiTxResult<Self> {
        let s = s.trim();
        if let Some((_, tag, _)) = PRIMITIVES.iter().find(|(_, _, name)| *name == s) {
            return Ok(tag.clone());
        }
        if let Some(inner) = s.strip_prefix("vector<").and_then(|s| s.strip_suffix('>')) {
            return Ok(TypeTag::Vector(Box::new(inner.parse()?)));
        }
        StructTag::from_str(s).map(TypeTag::Struct)
    }
}

impl BcsEncode for TypeTag {
    fn encode(&self, ser: &mut Serializer) {
        ser.uleb128(self.variant_index());
        match self {
            TypeTag::Vector(inner) => inner.encode(ser),
            TypeTag::Struct(tag) => tag.encode(ser),
            _ => {}
        }
    }
}

impl BcsDecode for TypeTag {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        let tag = de.uleb128()?;
        match tag {
            STRUCT_TAG => de.nested(StructTag::decode).map(TypeTag::Struct),
            // Signer and vector bodies are not decodable.
            5 | VECTOR_TAG => Err(SuiTxError::UnsupportedVariant {
                type_name: "TypeTag",
                tag,
            }),
            _ => PRIMITIVES
                .iter()
                .find(|(index, _, _)| *index == tag)
                .map(|(_, primitive, _)| primitive.clone())
                .ok_or(SuiTxError::UnsupportedVariant {
                    type_name: "TypeTag",
                    tag,
                }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StructTag {
    pub address: AccountAddress,
    pub module: String,
    pub name: String,
    pub type_args: Vec<TypeTag>,
}

impl StructTag {
    pub fn new(
        address: AccountAddress,
        module: impl Into<String>,
        name: impl Into<String>,
        type_args: Vec<TypeTag>,
    ) -> Self {
        Self {
            address,
            module: module.into(),
            name: name.into(),
            type_args,
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if let Some((first, rest)) = self.type_args.split_first() {
            write!(f, "<{}", first)?;
            for arg in rest {
                write!(f, ", {}", arg)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Minimal parser for `address::module::name`. Generic arguments are not supported.
impl FromStr for StructTag {
    type Err = SuiTxError;

    fn from_str(s: &str) -> SuiTxResult<Self> {
        if s.contains('<') {
            return Err(SuiTxError::malformed(format!(
                "generic struct tags are not supported: '{}'",
                s
            )));
        }
        let parts: Vec<&str> = s.trim().split("::").collect();
        match parts.as_slice() {
            [address, module, name] if !module.is_empty() && !name.is_empty() => Ok(Self::new(
                AccountAddress::from_hex(address)?,
                *module,
                *name,
                vec![],
            )),
            _ => Err(SuiTxError::malformed(format!(
                "expected 'address::module::name', got '{}'",
                s
            ))),
        }
    }
}

impl BcsEncode for StructTag {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.address);
        ser.str(&self.module);
        ser.str(&self.name);
        ser.encode(&self.type_args);
    }
}

impl BcsDecode for StructTag {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            address: de.decode()?,
            module: de.str()?,
            name: de.str()?,
            type_args: de.decode()?,
        })
    }
}
