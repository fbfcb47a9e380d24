//! Tests for the `ProcessEnv` source against the real environment.
//!
//! Everything here mutates process-global state, so tests are serialized
//! via `serial_test` and the global lock, and scoped with `temp_env`.

use serial_test::serial;
use std::time::Duration;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

const REQUIRED: [(&str, Option<&str>); 2] = [
    ("DB_URL", Some("postgres://atlas:pw@db:5432/atlas")),
    ("JWT_SECRET", Some("process-env-secret")),
];

#[test]
#[serial]
fn process_env_source_resolves_variables() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            REQUIRED[0],
            REQUIRED[1],
            ("PORT", Some("9191")),
            ("JWT_TTL", Some("10m")),
        ],
        || {
            let mut loader = ConfigLoader::new();
            let config = loader.load().expect("config should load");

            assert_eq!(config.database.url, "postgres://atlas:pw@db:5432/atlas");
            assert_eq!(config.server.port, 9191);
            assert_eq!(config.auth.token_ttl, Duration::from_secs(600));
        },
    );
}

#[test]
#[serial]
fn process_env_missing_required_fails() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [("DB_URL", None::<&str>), ("JWT_SECRET", Some("secret"))],
        || {
            let mut loader = ConfigLoader::new();
            let error = loader.load().expect_err("missing DB_URL should fail");
            assert!(matches!(error, ConfigError::MissingVar("DB_URL")));
        },
    );
}

#[test]
#[serial]
fn empty_process_env_values_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            REQUIRED[0],
            REQUIRED[1],
            ("PORT", Some("")),
            ("REDIS_ADDR", Some("   ")),
        ],
        || {
            let mut loader = ConfigLoader::new();
            let config = loader.load().unwrap();

            // Blank values fall through to defaults without a warning.
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.cache.addr, "redis:6379");
            assert!(loader.warnings().is_empty());
        },
    );
}

#[test]
#[serial]
fn process_env_values_are_trimmed() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [REQUIRED[0], REQUIRED[1], ("JWT_ISSUER", Some(" atlas-prod "))],
        || {
            let mut loader = ConfigLoader::new();
            let config = loader.load().unwrap();
            assert_eq!(config.auth.issuer, "atlas-prod");
        },
    );
}
