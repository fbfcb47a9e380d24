//! Environment lookup abstraction for configuration loading.
//!
//! Responsibilities:
//! - Define [`EnvSource`], the key-value lookup the loader reads from.
//! - Provide the production [`ProcessEnv`] source and a `HashMap` source
//!   for tests, so tests never mutate real process state.
//! - Filter empty/whitespace-only values and trim surrounding whitespace.
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::collections::HashMap;

/// A key-value lookup the loader resolves variables from.
///
/// Production code uses [`ProcessEnv`]; tests inject a `HashMap` to avoid
/// touching the real process environment.
pub trait EnvSource {
    /// Raw lookup. Emptiness filtering and trimming happen in the loader.
    fn var(&self, key: &str) -> Option<String>;
}

/// The ambient process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Filter out empty/whitespace-only values and trim the rest.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean token, case-insensitively.
///
/// Accepted true tokens: "true", "1", "yes", "on".
/// Accepted false tokens: "false", "0", "no", "off".
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_filters_and_trims() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some("value".to_string())), Some("value".to_string()));
        assert_eq!(
            non_empty(Some(" value ".to_string())),
            Some("value".to_string())
        );
    }

    #[test]
    fn hash_map_source_returns_values() {
        let mut env = HashMap::new();
        env.insert("KEY".to_string(), "value".to_string());

        assert_eq!(env.var("KEY"), Some("value".to_string()));
        assert_eq!(env.var("OTHER"), None);
    }

    #[test]
    fn parse_bool_accepts_all_tokens() {
        for token in ["true", "1", "yes", "on", "TRUE", "Yes", "ON"] {
            assert_eq!(parse_bool(token), Some(true), "token: {token}");
        }
        for token in ["false", "0", "no", "off", "FALSE", "No", "OFF"] {
            assert_eq!(parse_bool(token), Some(false), "token: {token}");
        }
        for token in ["2", "enabled", "tru", ""] {
            assert_eq!(parse_bool(token), None, "token: {token}");
        }
    }
}
