//! Intent prefix prepended to every signed transaction.

use serde::{Deserialize, Serialize};
use sui_tx_types::{BcsDecode, BcsEncode, Deserializer, Serializer, SuiAddress, SuiTxResult};

use crate::transaction::TransactionData;

/// Three-byte domain separator: `scope ‖ version ‖ app_id`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    pub scope: u8,
    pub version: u8,
    pub app_id: u8,
}

impl Intent {
    pub const LENGTH: usize = 3;

    pub const fn new(scope: u8, version: u8, app_id: u8) -> Self {
        Self {
            scope,
            version,
            app_id,
        }
    }

    /// Scope 0, version 0, app id 0: a Sui transaction.
    pub const fn sui_transaction() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Default for Intent {
    fn default() -> Self {
        Self::sui_transaction()
    }
}

impl BcsEncode for Intent {
    fn encode(&self, ser: &mut Serializer) {
        ser.u8(self.scope);
        ser.u8(self.version);
        ser.u8(self.app_id);
    }
}

impl BcsDecode for Intent {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            scope: de.u8()?,
            version: de.u8()?,
            app_id: de.u8()?,
        })
    }
}

/// The signed payload: intent followed by the transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMessage {
    pub intent: Intent,
    pub value: TransactionData,
}

impl IntentMessage {
    pub fn new(intent: Intent, value: TransactionData) -> Self {
        Self { intent, value }
    }

    pub fn sender(&self) -> SuiAddress {
        self.value.sender
    }
}

impl From<TransactionData> for IntentMessage {
    fn from(value: TransactionData) -> Self {
        Self::new(Intent::sui_transaction(), value)
    }
}

impl BcsEncode for IntentMessage {
    fn encode(&self, ser: &mut Serializer) {
        ser.encode(&self.intent);
        ser.encode(&self.value);
    }
}

impl BcsDecode for IntentMessage {
    fn decode(de: &mut Deserializer<'_>) -> SuiTxResult<Self> {
        Ok(Self {
            intent: de.decode()?,
            value: de.decode()?,
        })
    }
}
