//! Error type shared by the codec, the data model and the signature envelope.
//!
//! Every failure here is local and deterministic. Nothing is retried or recovered
//! internally; callers receive the variant and decide.

use crate::address::SuiAddress;

/// Result alias used throughout the workspace.
pub type SuiTxResult<T> = Result<T, SuiTxError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiTxError {
    /// A fixed-size value was built from the wrong number of bytes.
    LengthMismatch {
        /// What was being constructed (e.g. "address", "object digest")
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A discriminant that is unknown, or known but intentionally not decodable.
    UnsupportedVariant {
        /// The union being decoded
        type_name: &'static str,
        tag: u32,
    },

    /// The decoder ran out of bytes in the middle of a read.
    TruncatedInput { needed: usize, remaining: usize },

    /// A constructor was given values that fit no variant of the union.
    ShapeMismatch(String),

    /// Unknown signature scheme flag, or a flag that disagrees with its wrapper.
    SchemeMismatch(u8),

    /// The address derived from the embedded public key is not the declared sender.
    SenderMismatch {
        declared: SuiAddress,
        derived: SuiAddress,
    },

    /// Bytes or text that cannot be interpreted (bad bool byte, bad UTF-8, bad hex, ...).
    MalformedInput(String),

    /// The curve backend rejected key material.
    InvalidKey(String),
}

impl SuiTxError {
    pub fn length(what: &'static str, expected: usize, actual: usize) -> Self {
        SuiTxError::LengthMismatch {
            what,
            expected,
            actual,
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        SuiTxError::MalformedInput(msg.into())
    }
}

impl std::fmt::Display for SuiTxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuiTxError::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "LengthMismatch: expected {} of length {}, got {}",
                what, expected, actual
            ),
            SuiTxError::UnsupportedVariant { type_name, tag } => {
                write!(f, "UnsupportedVariant: {} has no decodable variant {}", type_name, tag)
            }
            SuiTxError::TruncatedInput { needed, remaining } => write!(
                f,
                "TruncatedInput: needed {} more bytes, {} remaining",
                needed, remaining
            ),
            SuiTxError::ShapeMismatch(msg) => write!(f, "ShapeMismatch: {}", msg),
            SuiTxError::SchemeMismatch(flag) => {
                write!(f, "SchemeMismatch: unrecognized signature scheme flag {:#04x}", flag)
            }
            SuiTxError::SenderMismatch { declared, derived } => write!(
                f,
                "SenderMismatch: declared sender is {}, signature key derives {}",
                declared, derived
            ),
            SuiTxError::MalformedInput(msg) => write!(f, "MalformedInput: {}", msg),
            SuiTxError::InvalidKey(msg) => write!(f, "InvalidKey: {}", msg),
        }
    }
}

impl std::error::Error for SuiTxError {}
