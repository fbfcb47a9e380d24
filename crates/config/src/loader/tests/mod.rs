//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test required-variable handling and defaults.
//! - Test type coercion fallbacks and the warnings they record.
//! - Test cross-field validation and override-file precedence.
//!
//! Invariants:
//! - Tests resolve against injected `HashMap` sources wherever possible;
//!   only tests that deliberately exercise `ProcessEnv` touch the real
//!   environment, serialized via `serial_test` and the global lock.

use std::collections::HashMap;
use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub(crate) fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A synthetic environment carrying just the required variables.
pub(crate) fn base_env() -> HashMap<String, String> {
    HashMap::from([
        (
            "DB_URL".to_string(),
            "postgres://atlas:pw@db:5432/atlas".to_string(),
        ),
        ("JWT_SECRET".to_string(), "test-signing-secret".to_string()),
    ])
}

/// A synthetic environment: the required variables plus the given pairs.
pub(crate) fn env_with(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    let mut env = base_env();
    for (key, value) in pairs {
        env.insert((*key).to_string(), (*value).to_string());
    }
    env
}
