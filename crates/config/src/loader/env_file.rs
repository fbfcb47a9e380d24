//! Best-effort loading of `.env`-style override files.
//!
//! Responsibilities:
//! - Parse override files into a key-value map without mutating the
//!   process environment (dotenvy's iterator API).
//! - Apply first-defined-wins precedence across the file chain.
//!
//! Does NOT handle:
//! - Precedence against the environment source (the loader checks the
//!   source first and only then falls back to file values).
//!
//! Invariants:
//! - An absent or unreadable file is skipped silently.
//! - A malformed file is skipped from the bad line onward with a warning;
//!   loading never aborts.
//! - Warnings never reproduce file content, to prevent secret leakage.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Parse the given override files, in priority order.
///
/// The first file that defines a key wins. Returns whatever could be
/// read; failures only reduce the result, never abort.
pub(crate) fn load_env_files<P: AsRef<Path>>(paths: &[P]) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for path in paths {
        let path = path.as_ref();
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(_) => {
                debug!(path = %path.display(), "override file not loaded, skipping");
                continue;
            }
        };

        for item in iter {
            match item {
                Ok((key, value)) => {
                    values.entry(key).or_insert(value);
                }
                Err(_) => {
                    // Skip the rest of the file; the error value is not
                    // inspected so no line content can leak into logs.
                    warn!(
                        path = %path.display(),
                        "malformed override file, remaining entries skipped"
                    );
                    break;
                }
            }
        }
    }

    values
}
