//! Centralized defaults for the Atlas API configuration.
//!
//! This module contains the compile-time fallback for every optional
//! configuration variable, so defaults are never duplicated as magic
//! numbers in the loader or in tests.

// =============================================================================
// Database & Connection Pool Defaults
// =============================================================================

/// Default maximum number of open database connections.
pub const DEFAULT_DB_MAX_OPEN_CONNS: u32 = 10;

/// Default maximum number of idle database connections.
///
/// Must stay below [`DEFAULT_DB_MAX_OPEN_CONNS`]; the loader enforces the
/// same ordering on resolved values.
pub const DEFAULT_DB_MAX_IDLE_CONNS: u32 = 5;

/// Default maximum lifetime of a pooled connection in seconds (30 minutes).
pub const DEFAULT_DB_CONN_MAX_LIFETIME_SECS: u64 = 1800;

/// Default maximum idle time of a pooled connection in seconds (5 minutes).
pub const DEFAULT_DB_CONN_MAX_IDLE_TIME_SECS: u64 = 300;

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default public HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default admin/health HTTP port.
pub const DEFAULT_ADMIN_PORT: u16 = 8081;

/// Default HTTP read timeout in seconds.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;

/// Default HTTP write timeout in seconds.
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 10;

/// Default HTTP idle connection timeout in seconds.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// Token Defaults
// =============================================================================

/// Default access token time-to-live in seconds (15 minutes).
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 900;

/// Default refresh token time-to-live in seconds (7 days).
///
/// Must stay above [`DEFAULT_TOKEN_TTL_SECS`]; the loader enforces the
/// same ordering on resolved values.
pub const DEFAULT_TOKEN_REFRESH_TTL_SECS: u64 = 7 * 24 * 3600;

/// Default token issuer name.
pub const DEFAULT_TOKEN_ISSUER: &str = "atlas-api";

// =============================================================================
// Cache & Broker Defaults
// =============================================================================

/// Default cache service address.
pub const DEFAULT_CACHE_ADDR: &str = "redis:6379";

/// Default cache logical database index.
pub const DEFAULT_CACHE_DB: u32 = 0;

/// Default cache connection pool size.
pub const DEFAULT_CACHE_POOL_SIZE: u32 = 10;

/// Default message broker address.
pub const DEFAULT_BROKER_ADDR: &str = "kafka:9092";

/// Default broker consumer group name.
pub const DEFAULT_CONSUMER_GROUP: &str = "atlas-api";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default log verbosity.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Override Files
// =============================================================================

/// Override files probed by default, in priority order.
///
/// The first file that defines a key wins; keys already present in the
/// environment are never overwritten by a file.
pub const DEFAULT_ENV_FILES: &[&str] = &[".env", ".env.local"];
