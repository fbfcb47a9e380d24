//! Configuration loader for environment variables and override files.
//!
//! Responsibilities:
//! - Resolve the service configuration from an [`EnvSource`], local
//!   `.env`-style override files, and compile-time defaults.
//! - Enforce the cross-field invariants (token TTL ordering, pool sizing).
//! - Record recoverable parse failures as warnings instead of aborting.
//!
//! Does NOT handle:
//! - Terminating the process on fatal errors (the binary entry point
//!   decides that from the returned `ConfigError`).
//!
//! Invariants / Assumptions:
//! - Values from the environment source take precedence over file values.
//! - Empty or whitespace-only values are treated as unset.
//! - Override files are best-effort: absent or malformed files never abort
//!   loading, and warnings never reproduce file content.

mod builder;
mod duration;
mod env;
mod env_file;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, ConfigWarning};
pub use duration::{ParseDurationError, parse_duration};
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
