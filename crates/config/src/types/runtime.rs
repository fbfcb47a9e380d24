//! Feature toggles and logging settings.

use serde::Serialize;
use std::fmt;

/// Feature toggles.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureFlags {
    /// Enable debug endpoints and verbose diagnostics.
    pub enable_debug: bool,
    /// Serve the interactive API documentation.
    pub enable_api_docs: bool,
}

/// Logging verbosity and output format.
#[derive(Debug, Clone, Serialize)]
pub struct LoggingConfig {
    /// Verbosity directive passed to the subscriber (e.g. "info", "debug").
    pub level: String,
    /// Output format for log events.
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable output.
    Text,
}

impl LogFormat {
    /// Parse a format name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" => Some(LogFormat::Text),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogFormat::Json => "json",
            LogFormat::Text => "text",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
