//! HTTP server addresses and timeouts.

use serde::Serialize;
use std::time::Duration;

use super::duration_seconds;

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    /// Bind address (e.g. "0.0.0.0").
    pub host: String,
    /// Public HTTP port.
    pub port: u16,
    /// Admin/health HTTP port.
    pub admin_port: u16,
    /// Request read timeout.
    #[serde(with = "duration_seconds")]
    pub read_timeout: Duration,
    /// Response write timeout.
    #[serde(with = "duration_seconds")]
    pub write_timeout: Duration,
    /// Keep-alive idle connection timeout.
    #[serde(with = "duration_seconds")]
    pub idle_timeout: Duration,
    /// Graceful shutdown deadline.
    #[serde(with = "duration_seconds")]
    pub shutdown_timeout: Duration,
}
