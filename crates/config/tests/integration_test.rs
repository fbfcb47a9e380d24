//! End-to-end configuration loading through the public API.
//!
//! These tests drive `ConfigLoader` the way the service binary does:
//! synthetic environment source, optional override files, full resolution
//! and validation, redacted serialization.

use atlas_config::{Config, ConfigError, ConfigLoader, LogFormat, parse_duration};
use std::collections::HashMap;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn full_resolution_from_files_and_environment() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join(".env");
    let local_file = temp_dir.path().join(".env.local");
    fs::write(
        &env_file,
        "JWT_SECRET=file-secret\nPORT=9000\nJWT_ISSUER=atlas-dev\n",
    )
    .unwrap();
    fs::write(&local_file, "PORT=9001\nKAFKA_ADDR=localhost:9092\n").unwrap();

    // DB_URL and PORT come from the environment; JWT_SECRET and issuer
    // fall through to the first file; KAFKA_ADDR to the second.
    let source = env(&[
        ("DB_URL", "postgres://atlas:pw@localhost:5432/atlas"),
        ("PORT", "8080"),
    ]);
    let mut loader =
        ConfigLoader::with_source(source).load_env_files_from(&[env_file, local_file]);
    let config: Config = loader.load().expect("config should load");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.auth.issuer, "atlas-dev");
    assert_eq!(config.broker.addr, "localhost:9092");
    assert!(loader.warnings().is_empty());
}

#[test]
fn fatal_outcomes_surface_as_errors_not_termination() {
    // Missing required variable.
    let mut loader = ConfigLoader::with_source(env(&[("JWT_SECRET", "s")]));
    assert!(matches!(
        loader.load(),
        Err(ConfigError::MissingVar("DB_URL"))
    ));

    // Violated invariant.
    let mut loader = ConfigLoader::with_source(env(&[
        ("DB_URL", "postgres://db"),
        ("JWT_SECRET", "s"),
        ("JWT_TTL", "1h"),
        ("JWT_REFRESH_TTL", "30m"),
    ]));
    assert!(matches!(loader.load(), Err(ConfigError::TtlOrdering { .. })));
}

#[test]
fn resolved_record_round_trips_to_redacted_json() {
    let mut loader = ConfigLoader::with_source(env(&[
        ("DB_URL", "postgres://atlas:hunter2@db:5432/atlas"),
        ("JWT_SECRET", "signing-secret-value"),
        ("REDIS_PASSWORD", "cache-secret-value"),
        ("LOG_FORMAT", "TEXT"),
    ]));
    let config = loader.load().unwrap();

    assert_eq!(config.logging.format, LogFormat::Text);

    let json = serde_json::to_string_pretty(&config).unwrap();
    assert!(!json.contains("signing-secret-value"));
    assert!(!json.contains("cache-secret-value"));
    assert!(!json.contains("hunter2"));
    assert!(json.contains("\"port\": 8080"));
}

#[test]
fn parse_duration_is_exported() {
    assert_eq!(parse_duration("90s"), Ok(Duration::from_secs(90)));
}
