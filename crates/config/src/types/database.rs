//! Database connection and pool settings.

use serde::Serialize;
use std::time::Duration;

use super::duration_seconds;

/// Database connection and pool configuration.
///
/// The connection strings may embed credentials, so they are excluded from
/// serialization along with the dedicated secret fields elsewhere.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    /// Primary connection string (required at startup).
    #[serde(skip_serializing)]
    pub url: String,
    /// Read-replica connection string; falls back to the primary.
    #[serde(skip_serializing)]
    pub replica_url: String,
    /// Maximum number of open connections in the pool.
    pub max_open_conns: u32,
    /// Maximum number of idle connections kept in the pool.
    ///
    /// Never exceeds `max_open_conns` in a loaded configuration.
    pub max_idle_conns: u32,
    /// Maximum lifetime of a pooled connection.
    #[serde(with = "duration_seconds")]
    pub conn_max_lifetime: Duration,
    /// Maximum idle time before a pooled connection is closed.
    #[serde(with = "duration_seconds")]
    pub conn_max_idle_time: Duration,
}
