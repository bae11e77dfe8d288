//! Move call arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bcs::{BcsDecode, BcsEncode, Deserializer, Serializer};
use crate::encoding::{base64_bytes, base64_encode};
use crate::error::{SuiTxError, SuiTxResult};
use crate::object::{ObjectID, ObjectRef};

/// A call argument. The variant is always explicit; `ObjectVec` still carries its own
/// wire tag (2) so encode and decode stay symmetric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    /// BCS bytes of a pure value.
    Pure(#[serde(with = "base64_bytes")] Vec<u8>),
    Object(ObjectArg),
    ObjectVec(Vec<ObjectArg>),
}

impl CallArg {
    /// Pure argument holding the encoding of `value`.
    pub fn pure_value<T: BcsEncode + ?Sized>(value: &T) -> Self {
        CallArg::Pure(value.to_bcs_bytes())
    }

    pub fn variant_index(&self) -> u32 {
        match self {
            CallArg::Pure(_) => 0,
            CallArg::Object(_) => 1,
            CallArg::ObjectVec(_) => 2,
        }
    }
}

impl From<ObjectArg> for CallArg {
    fn from(arg: ObjectArg) -> Self {
        CallArg::Object(arg)
    }
}

impl From<Vec<ObjectArg>> for CallArg {
    fn from(args: Vec<ObjectArg>) -> Self {
        CallArg::ObjectVec(args)
    }
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallArg::Pure(bytes) => write!(f, "pure({})", base64_encode(bytes)),
            CallArg::Object(arg) => write!(f, "{}", arg),
            CallArg::ObjectVec(args) => {
                f.write_str("[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl BcsEncode for CallArg {
    fn encode(&self, ser: &mut Serializer) {
        ser.uleb128(self.variant_index());
        match self {
            CallArg::Pure(bytes) => ser.bytes(bytes),
            CallArg::Object(arg) => arg.encode(ser),
            CallArg::ObjectVec(args) => args.encode(ser),
        }
    }
}

impl BcsDecode for CallArg {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        match de.uleb128()? {
            0 => Ok(CallArg::Pure(de.bytes()?)),
            1 => Ok(CallArg::Object(de.decode()?)),
            2 => Ok(CallArg::ObjectVec(de.decode()?)),
            tag => Err(SuiTxError::UnsupportedVariant {
                type_name: "CallArg",
                tag,
            }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectArg {
    ImmOrOwnedObject(ObjectRef),
    SharedObject(SharedObjectArg),
}

impl ObjectArg {
    pub fn variant_index(&self) -> u32 {
        match self {
            ObjectArg::ImmOrOwnedObject(_) => 0,
            ObjectArg::SharedObject(_) => 1,
        }
    }
}

impl From<ObjectRef> for ObjectArg {
    fn from(object_ref: ObjectRef) -> Self {
        ObjectArg::ImmOrOwnedObject(object_ref)
    }
}

impl From<SharedObjectArg> for ObjectArg {
    fn from(shared: SharedObjectArg) -> Self {
        ObjectArg::SharedObject(shared)
    }
}

impl fmt::Display for ObjectArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectArg::ImmOrOwnedObject(object_ref) => write!(f, "{}", object_ref),
            ObjectArg::SharedObject(shared) => write!(f, "{}", shared),
        }
    }
}

impl BcsEncode for ObjectArg {
    fn encode(&self, ser: &mut Serializer) {
        ser.uleb128(self.variant_index());
        match self {
            ObjectArg::ImmOrOwnedObject(object_ref) => object_ref.encode(ser),
            ObjectArg::SharedObject(shared) => shared.encode(ser),
        }
    }
}

impl BcsDecode for ObjectArg {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        match de.uleb128()? {
            0 => Ok(ObjectArg::ImmOrOwnedObject(de.decode()?)),
            1 => Ok(ObjectArg::SharedObject(de.decode()?)),
            tag => Err(SuiTxError::UnsupportedVariant {
                type_name: "ObjectArg",
                tag,
            }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedObjectArg {
    pub object_id: ObjectID,
    pub initial_shared_version: u64,
}

impl SharedObjectArg {
    pub fn new(object_id: ObjectID, initial_shared_version: u64) -> Self {
        Self {
            object_id,
            initial_shared_version,
        }
    }
}

impl fmt::Display for SharedObjectArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, version: {}}}",
            self.object_id, self.initial_shared_version
        )
    }
}

impl BcsEncode for SharedObjectArg {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.object_id);
        ser.u64(self.initial_shared_version);
    }
}

impl BcsDecode for SharedObjectArg {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            object_id: de.decode()?,
            initial_shared_version: de.u64()?,
        })
    }
}
