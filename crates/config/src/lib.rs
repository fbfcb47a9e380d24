//! Configuration management for the Atlas API service.
//!
//! This crate resolves the service configuration once at process startup
//! from environment variables, compile-time defaults, and optional local
//! `.env`-style override files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ConfigWarning, EnvSource, ParseDurationError, ProcessEnv,
    parse_duration,
};
pub use types::{
    AuthConfig, BrokerConfig, CacheConfig, Config, DatabaseConfig, FeatureFlags, LogFormat,
    LoggingConfig, ServerConfig,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
