//! Custom assertion utilities for tests.

use sui_tx_sdk::BcsEncode;
use sui_tx_types::encoding::base64_encode;

/// Assert that a result is Ok and return the inner value.
#[allow(dead_code)]
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{} failed: {:?}", context, e),
    }
}

/// Assert that an error message contains expected text (case-insensitive).
#[allow(dead_code)]
pub fn assert_error_contains<E: std::fmt::Display>(error: E, expected_text: &str, context: &str) {
    let error_str = error.to_string().to_lowercase();
    assert!(
        error_str.contains(&expected_text.to_lowercase()),
        "{}: error message should contain '{}', got: {}",
        context,
        expected_text,
        error
    );
}

/// Assert that `value` encodes to the given base64 string.
#[allow(dead_code)]
pub fn assert_b64_eq<T: BcsEncode + ?Sized>(value: &T, expected: &str, context: &str) {
    let actual = base64_encode(&value.to_bcs_bytes());
    if actual != expected {
        panic!(
            "{}: encoding mismatch\n  expected: {}\n  actual:   {}",
            context, expected, actual
        );
    }
}
