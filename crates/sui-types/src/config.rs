//! Decoder strictness knobs.

use crate::env_utils::{env_bool_or, env_var_or};

/// Largest length prefix accepted for any sequence or byte string.
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// Deepest nesting accepted for recursive values such as `TypeTag`.
pub const MAX_CONTAINER_DEPTH: usize = 500;

pub const CANONICAL_ULEB128_ENV: &str = "SUI_TX_CANONICAL_ULEB128";
pub const MAX_SEQUENCE_LENGTH_ENV: &str = "SUI_TX_MAX_SEQUENCE_LENGTH";
pub const MAX_CONTAINER_DEPTH_ENV: &str = "SUI_TX_MAX_CONTAINER_DEPTH";

/// Configuration consumed by [`Deserializer`](crate::bcs::Deserializer).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Reject ULEB128 values written with more bytes than necessary.
    pub canonical_uleb128: bool,
    /// Upper bound on decoded length prefixes.
    pub max_sequence_length: usize,
    /// Upper bound on recursive nesting.
    pub max_container_depth: usize,
}

impl CodecConfig {
    /// Accept over-long ULEB128 encodings.
    pub fn lenient() -> Self {
        Self {
            canonical_uleb128: false,
            ..Self::default()
        }
    }

    /// Defaults overlaid with `SUI_TX_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            canonical_uleb128: env_bool_or(CANONICAL_ULEB128_ENV, defaults.canonical_uleb128),
            max_sequence_length: env_var_or(MAX_SEQUENCE_LENGTH_ENV, defaults.max_sequence_length)
                .min(MAX_SEQUENCE_LENGTH),
            max_container_depth: env_var_or(MAX_CONTAINER_DEPTH_ENV, defaults.max_container_depth),
        };
        tracing::debug!(?config, "resolved codec config from environment");
        config
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            canonical_uleb128: true,
            max_sequence_length: MAX_SEQUENCE_LENGTH,
            max_container_depth: MAX_CONTAINER_DEPTH,
        }
    }
}
