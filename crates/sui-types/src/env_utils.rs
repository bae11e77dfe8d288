//! Environment variable parsing utilities.
//!
//! Typed helpers used by [`CodecConfig::from_env`](crate::config::CodecConfig::from_env)
//! so that each knob reads as one line instead of the usual
//! `std::env::var(..).ok().and_then(|v| v.parse().ok()).unwrap_or(..)` chain.
//!
//! # Example
//!
//! ```
//! use sui_tx_types::env_utils::{env_bool_or, env_var_or};
//!
//! let depth: usize = env_var_or("SUI_TX_DOC_DEPTH", 500);
//! let strict = env_bool_or("SUI_TX_DOC_STRICT", true);
//! assert_eq!(depth, 500);
//! assert!(strict);
//! ```

use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is not set or cannot be parsed.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable with a default value.
///
/// Returns the default if the variable is not set or cannot be parsed.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Read a boolean flag, falling back to `default` when the variable is unset.
///
/// "1", "true", "yes" and "on" (case-insensitive) are truthy; any other value is false.
pub fn env_bool_or(key: &str, default: bool) -> bool {
    match std::env::var(key).ok() {
        Some(v) => matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_parsing() {
        std::env::set_var("SUI_TX_TEST_U64", " 42 ");
        let val: Option<u64> = env_var("SUI_TX_TEST_U64");
        assert_eq!(val, Some(42));

        let missing: Option<u64> = env_var("SUI_TX_NONEXISTENT_VAR_1");
        assert_eq!(missing, None);

        std::env::remove_var("SUI_TX_TEST_U64");
    }

    #[test]
    fn test_env_var_or() {
        std::env::set_var("SUI_TX_TEST_WITH_DEFAULT", "100");
        let val: usize = env_var_or("SUI_TX_TEST_WITH_DEFAULT", 50);
        assert_eq!(val, 100);

        std::env::set_var("SUI_TX_TEST_GARBAGE", "not-a-number");
        let val: usize = env_var_or("SUI_TX_TEST_GARBAGE", 50);
        assert_eq!(val, 50);

        let default_val: usize = env_var_or("SUI_TX_NONEXISTENT_VAR_2", 50);
        assert_eq!(default_val, 50);

        std::env::remove_var("SUI_TX_TEST_WITH_DEFAULT");
        std::env::remove_var("SUI_TX_TEST_GARBAGE");
    }

    #[test]
    fn test_env_bool_or() {
        std::env::set_var("SUI_TX_TEST_BOOL_YES", "YES");
        std::env::set_var("SUI_TX_TEST_BOOL_OFF", "off");

        assert!(env_bool_or("SUI_TX_TEST_BOOL_YES", false));
        assert!(!env_bool_or("SUI_TX_TEST_BOOL_OFF", true));
        assert!(env_bool_or("SUI_TX_NONEXISTENT_VAR_3", true));
        assert!(!env_bool_or("SUI_TX_NONEXISTENT_VAR_3", false));

        std::env::remove_var("SUI_TX_TEST_BOOL_YES");
        std::env::remove_var("SUI_TX_TEST_BOOL_OFF");
    }
}
