//! Token issuance settings.
//!
//! Invariants:
//! - `refresh_ttl` is strictly greater than `token_ttl` in any loaded
//!   configuration (enforced by the loader's cross-field validation).
//! - The signing secret is never serialized or logged.

use secrecy::SecretString;
use serde::Serialize;
use std::time::Duration;

use super::duration_seconds;

/// Token issuance configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AuthConfig {
    /// Token signing secret (required at startup).
    #[serde(skip_serializing)]
    pub secret: SecretString,
    /// Access token time-to-live.
    #[serde(with = "duration_seconds")]
    pub token_ttl: Duration,
    /// Refresh token time-to-live.
    #[serde(with = "duration_seconds")]
    pub refresh_ttl: Duration,
    /// Issuer name stamped into tokens.
    pub issuer: String,
}
