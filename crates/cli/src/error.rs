//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   startup failure modes.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Invariants:
//! - Exit code 0 always means a fully valid configuration.
//! - Codes 2 and 3 distinguish the two fatal classes (missing required
//!   variable, violated cross-field invariant).

use atlas_config::ConfigError;

/// Structured exit codes for atlas-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the configuration resolved and validated.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required environment variable is missing or empty.
    ///
    /// Scripts should provision the named variable; retrying cannot help.
    MissingVariable = 2,

    /// A cross-field invariant is violated.
    ///
    /// Scripts should fix the named values; retrying cannot help.
    InvalidConfiguration = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(error: &ConfigError) -> Self {
        match error {
            ConfigError::MissingVar(_) => ExitCode::MissingVariable,
            ConfigError::TtlOrdering { .. } | ConfigError::PoolSizing { .. } => {
                ExitCode::InvalidConfiguration
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn exit_codes_map_fatal_classes() {
        assert_eq!(
            ExitCode::from(&ConfigError::MissingVar("DB_URL")),
            ExitCode::MissingVariable
        );
        assert_eq!(
            ExitCode::from(&ConfigError::TtlOrdering {
                token_ttl: Duration::from_secs(900),
                refresh_ttl: Duration::from_secs(600),
            }),
            ExitCode::InvalidConfiguration
        );
        assert_eq!(
            ExitCode::from(&ConfigError::PoolSizing { idle: 20, open: 10 }),
            ExitCode::InvalidConfiguration
        );
    }

    #[test]
    fn exit_codes_convert_to_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::MissingVariable.as_i32(), 2);
        assert_eq!(ExitCode::InvalidConfiguration.as_i32(), 3);
    }
}
