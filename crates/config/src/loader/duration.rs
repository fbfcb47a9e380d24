//! Unit-suffixed duration parsing.
//!
//! Configuration variables express durations as one or more
//! `<count><unit>` segments, e.g. "500ms", "30s", "15m", "24h", "7d",
//! or compounds like "1h30m". Units: ms, s, m, h, d.

use std::time::Duration;
use thiserror::Error;

/// A duration expression could not be parsed.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid duration expression (expected e.g. \"30s\", \"15m\", \"24h\"): {input}")]
pub struct ParseDurationError {
    input: String,
}

/// Parse a unit-suffixed duration expression.
pub fn parse_duration(input: &str) -> Result<Duration, ParseDurationError> {
    let err = || ParseDurationError {
        input: input.to_string(),
    };

    let s = input.trim();
    if s.is_empty() {
        return Err(err());
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return Err(err());
        }
        let count: u64 = rest[..digits].parse().map_err(|_| err())?;
        rest = &rest[digits..];

        let unit_len = rest.chars().take_while(|c| c.is_ascii_alphabetic()).count();
        let (unit, tail) = rest.split_at(unit_len);
        // checked_mul: absurd counts must surface as a parse failure, not
        // wrap around into an arbitrary duration.
        let secs = |per_unit: u64| count.checked_mul(per_unit).ok_or_else(err);
        let segment = match unit {
            "ms" => Duration::from_millis(count),
            "s" => Duration::from_secs(count),
            "m" => Duration::from_secs(secs(60)?),
            "h" => Duration::from_secs(secs(3600)?),
            "d" => Duration::from_secs(secs(86_400)?),
            _ => return Err(err()),
        };
        total = total.checked_add(segment).ok_or_else(err)?;
        rest = tail;
    }

    Ok(total)
}
