//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the fatal outcomes of configuration loading.
//!
//! Invariants:
//! - Every variant names the offending key or the violated rule together
//!   with the resolved values, so the startup failure message is
//!   actionable on its own.
//! - Recoverable parse failures are never errors; they surface as
//!   [`crate::ConfigWarning`] values plus defaults.

use std::time::Duration;
use thiserror::Error;

/// Fatal configuration loading failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is absent, empty, or whitespace-only.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// The refresh token TTL does not exceed the access token TTL.
    #[error(
        "token refresh TTL ({refresh_ttl:?}) must be greater than token TTL ({token_ttl:?})"
    )]
    TtlOrdering {
        token_ttl: Duration,
        refresh_ttl: Duration,
    },

    /// The idle connection limit exceeds the open connection limit.
    #[error(
        "DB_MAX_IDLE_CONNS ({idle}) must not exceed DB_MAX_OPEN_CONNS ({open})"
    )]
    PoolSizing { idle: u32, open: u32 },
}
