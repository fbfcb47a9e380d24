//! Configuration loader implementation.
//!
//! Responsibilities:
//! - Resolve every configuration variable from the environment source,
//!   then from override-file values, then from compile-time defaults.
//! - Fail on missing required variables and on cross-field invariant
//!   violations; degrade to defaults (with a warning) on parse failures.
//!
//! Does NOT handle:
//! - Override file parsing (delegated to env_file.rs).
//! - Duration grammar (delegated to duration.rs).
//! - Emitting the startup summary: callers do that via
//!   [`Config::emit_startup_summary`] once logging is configured from the
//!   resolved record, so the summary honors the resolved `LOG_FORMAT`.
//!
//! Invariants / Assumptions:
//! - Environment values take precedence over override-file values.
//! - `load_env_files()` must be called explicitly to enable file loading.
//! - The `DOTENV_DISABLED` variable is checked before the default file
//!   chain is probed.

use secrecy::SecretString;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use super::duration::parse_duration;
use super::env::{EnvSource, ProcessEnv, non_empty, parse_bool};
use super::env_file::load_env_files;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ADMIN_PORT, DEFAULT_BROKER_ADDR, DEFAULT_CACHE_ADDR, DEFAULT_CACHE_DB,
    DEFAULT_CACHE_POOL_SIZE, DEFAULT_CONSUMER_GROUP, DEFAULT_DB_CONN_MAX_IDLE_TIME_SECS,
    DEFAULT_DB_CONN_MAX_LIFETIME_SECS, DEFAULT_DB_MAX_IDLE_CONNS, DEFAULT_DB_MAX_OPEN_CONNS,
    DEFAULT_ENV_FILES, DEFAULT_HOST, DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, DEFAULT_PORT,
    DEFAULT_READ_TIMEOUT_SECS, DEFAULT_SHUTDOWN_TIMEOUT_SECS, DEFAULT_TOKEN_ISSUER,
    DEFAULT_TOKEN_REFRESH_TTL_SECS, DEFAULT_TOKEN_TTL_SECS, DEFAULT_WRITE_TIMEOUT_SECS,
};
use crate::types::{
    AuthConfig, BrokerConfig, CacheConfig, Config, DatabaseConfig, FeatureFlags, LogFormat,
    LoggingConfig, ServerConfig,
};

/// A recoverable problem encountered while resolving a variable.
///
/// The offending value was replaced by the compile-time default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The environment variable the problem applies to.
    pub var: &'static str,
    /// What went wrong and what was substituted.
    pub message: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.var, self.message)
    }
}

/// Configuration loader over an [`EnvSource`].
///
/// Lookup precedence per key: environment source, then override-file
/// values, then the compile-time default.
pub struct ConfigLoader<S: EnvSource = ProcessEnv> {
    source: S,
    file_values: HashMap<String, String>,
    warnings: Vec<ConfigWarning>,
}

impl Default for ConfigLoader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader<ProcessEnv> {
    /// Create a loader over the real process environment.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl<S: EnvSource> ConfigLoader<S> {
    /// Create a loader over an explicit environment source.
    ///
    /// Tests pass a `HashMap<String, String>` here to resolve against a
    /// synthetic environment without mutating process state.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            file_values: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if override-file loading is disabled via environment variable.
    fn env_files_disabled(&self) -> bool {
        matches!(
            self.source.var("DOTENV_DISABLED").as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Probe the default override-file chain (`.env`, then `.env.local`).
    ///
    /// Loading is best-effort: absent or malformed files are skipped and
    /// never abort startup. If `DOTENV_DISABLED` is set to "true" or "1",
    /// no files are probed (useful for testing).
    pub fn load_env_files(self) -> Self {
        if self.env_files_disabled() {
            return self;
        }
        self.load_env_files_from(DEFAULT_ENV_FILES)
    }

    /// Load explicit override files, in priority order.
    ///
    /// First-defined-wins per key across the chain; keys already defined
    /// in the environment source always take precedence over file values.
    pub fn load_env_files_from<P: AsRef<Path>>(mut self, paths: &[P]) -> Self {
        let values = load_env_files(paths);
        for (key, value) in values {
            self.file_values.entry(key).or_insert(value);
        }
        self
    }

    /// Warnings recorded while resolving optional variables.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Resolve, validate, and return the configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when `DB_URL` or `JWT_SECRET`
    /// is absent or empty, and [`ConfigError::TtlOrdering`] /
    /// [`ConfigError::PoolSizing`] when a cross-field invariant is
    /// violated. The caller decides whether to terminate the process.
    pub fn load(&mut self) -> Result<Config, ConfigError> {
        let url = self.require("DB_URL")?;
        let secret = SecretString::new(self.require("JWT_SECRET")?.into());

        let database = DatabaseConfig {
            replica_url: self.lookup("DB_REPLICA_URL").unwrap_or_else(|| url.clone()),
            url,
            max_open_conns: self.int_or("DB_MAX_OPEN_CONNS", DEFAULT_DB_MAX_OPEN_CONNS),
            max_idle_conns: self.int_or("DB_MAX_IDLE_CONNS", DEFAULT_DB_MAX_IDLE_CONNS),
            conn_max_lifetime: self.duration_or(
                "DB_CONN_MAX_LIFETIME",
                Duration::from_secs(DEFAULT_DB_CONN_MAX_LIFETIME_SECS),
            ),
            conn_max_idle_time: self.duration_or(
                "DB_CONN_MAX_IDLE_TIME",
                Duration::from_secs(DEFAULT_DB_CONN_MAX_IDLE_TIME_SECS),
            ),
        };

        let server = ServerConfig {
            host: self.string_or("HOST", DEFAULT_HOST),
            port: self.int_or("PORT", DEFAULT_PORT),
            admin_port: self.int_or("ADMIN_PORT", DEFAULT_ADMIN_PORT),
            read_timeout: self
                .duration_or("READ_TIMEOUT", Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS)),
            write_timeout: self.duration_or(
                "WRITE_TIMEOUT",
                Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
            ),
            idle_timeout: self
                .duration_or("IDLE_TIMEOUT", Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS)),
            shutdown_timeout: self.duration_or(
                "SHUTDOWN_TIMEOUT",
                Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            ),
        };

        let auth = AuthConfig {
            secret,
            token_ttl: self.duration_with_legacy(
                "JWT_TTL",
                "JWT_TTL_MINUTES",
                60,
                Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
            ),
            refresh_ttl: self.duration_with_legacy(
                "JWT_REFRESH_TTL",
                "JWT_REFRESH_DAYS",
                86_400,
                Duration::from_secs(DEFAULT_TOKEN_REFRESH_TTL_SECS),
            ),
            issuer: self.string_or("JWT_ISSUER", DEFAULT_TOKEN_ISSUER),
        };

        let cache = CacheConfig {
            addr: self.string_or("REDIS_ADDR", DEFAULT_CACHE_ADDR),
            db: self.int_or("REDIS_DB", DEFAULT_CACHE_DB),
            password: self
                .lookup("REDIS_PASSWORD")
                .map(|p| SecretString::new(p.into())),
            pool_size: self.int_or("REDIS_POOL_SIZE", DEFAULT_CACHE_POOL_SIZE),
        };

        let broker = BrokerConfig {
            addr: self.string_or("KAFKA_ADDR", DEFAULT_BROKER_ADDR),
            consumer_group: self.string_or("KAFKA_CONSUMER_GROUP", DEFAULT_CONSUMER_GROUP),
        };

        let features = FeatureFlags {
            enable_debug: self.bool_or("ENABLE_DEBUG", false),
            enable_api_docs: self.bool_or("ENABLE_API_DOCS", false),
        };

        let logging = LoggingConfig {
            level: self.string_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            format: self.log_format_or("LOG_FORMAT", LogFormat::Json),
        };

        let config = Config {
            database,
            server,
            auth,
            cache,
            broker,
            identity_endpoint: self.lookup("IDENTITY_ENDPOINT"),
            features,
            logging,
        };

        Self::validate(&config)?;
        Ok(config)
    }

    /// Check the cross-field invariants on the fully resolved record.
    fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.auth.refresh_ttl <= config.auth.token_ttl {
            return Err(ConfigError::TtlOrdering {
                token_ttl: config.auth.token_ttl,
                refresh_ttl: config.auth.refresh_ttl,
            });
        }

        if config.database.max_idle_conns > config.database.max_open_conns {
            return Err(ConfigError::PoolSizing {
                idle: config.database.max_idle_conns,
                open: config.database.max_open_conns,
            });
        }

        Ok(())
    }

    /// Look up a key: environment source first, then override-file values.
    /// Empty and whitespace-only values count as unset at both layers.
    fn lookup(&self, key: &str) -> Option<String> {
        non_empty(self.source.var(key)).or_else(|| non_empty(self.file_values.get(key).cloned()))
    }

    fn require(&self, key: &'static str) -> Result<String, ConfigError> {
        self.lookup(key).ok_or(ConfigError::MissingVar(key))
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    fn int_or<T>(&mut self, key: &'static str, default: T) -> T
    where
        T: FromStr + Copy + fmt::Display,
    {
        match self.lookup(key) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                self.warn(key, format!("not a valid integer, using default {default}"));
                default
            }),
            None => default,
        }
    }

    fn bool_or(&mut self, key: &'static str, default: bool) -> bool {
        match self.lookup(key) {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                self.warn(key, format!("not a valid boolean, using default {default}"));
                default
            }),
            None => default,
        }
    }

    fn duration_or(&mut self, key: &'static str, default: Duration) -> Duration {
        match self.lookup(key) {
            Some(raw) => parse_duration(&raw).unwrap_or_else(|_| {
                self.warn(
                    key,
                    format!("not a valid duration, using default {}s", default.as_secs()),
                );
                default
            }),
            None => default,
        }
    }

    /// Resolve a duration that has two input styles across deployments: a
    /// canonical duration expression (e.g. `JWT_TTL=15m`) and a legacy
    /// unit-count integer (e.g. `JWT_TTL_MINUTES=15`).
    ///
    /// The canonical form wins when both are set, with a warning naming
    /// both keys; the two styles are never merged silently.
    fn duration_with_legacy(
        &mut self,
        canonical: &'static str,
        legacy: &'static str,
        legacy_unit_secs: u64,
        default: Duration,
    ) -> Duration {
        match (self.lookup(canonical), self.lookup(legacy)) {
            (Some(raw), legacy_value) => {
                if legacy_value.is_some() {
                    self.warn(
                        legacy,
                        format!("ignored because {canonical} is set and takes precedence"),
                    );
                }
                parse_duration(&raw).unwrap_or_else(|_| {
                    self.warn(
                        canonical,
                        format!("not a valid duration, using default {}s", default.as_secs()),
                    );
                    default
                })
            }
            (None, Some(raw)) => {
                // checked_mul: an overflowing unit count is as unusable as a
                // non-numeric one and falls back the same way.
                let secs = raw
                    .parse::<u64>()
                    .ok()
                    .and_then(|count| count.checked_mul(legacy_unit_secs));
                match secs {
                    Some(secs) => Duration::from_secs(secs),
                    None => {
                        self.warn(
                            legacy,
                            format!("not a valid unit count, using default {}s", default.as_secs()),
                        );
                        default
                    }
                }
            }
            (None, None) => default,
        }
    }

    fn log_format_or(&mut self, key: &'static str, default: LogFormat) -> LogFormat {
        match self.lookup(key) {
            Some(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
                self.warn(key, format!("not a valid log format, using default {default}"));
                default
            }),
            None => default,
        }
    }

    fn warn(&mut self, var: &'static str, message: String) {
        warn!(var, %message, "invalid optional configuration value");
        self.warnings.push(ConfigWarning { var, message });
    }
}
