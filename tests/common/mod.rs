#![allow(unused_imports)]
//! Shared test utilities for integration tests.
//!
//! - `fixtures`: the known-good vector corpus in `tests/fixtures/vectors.json`
//! - `assertions`: assertion helpers with readable failure output

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_b64_eq, assert_error_contains, assert_ok};
pub use fixtures::{load_vectors, Vectors};
