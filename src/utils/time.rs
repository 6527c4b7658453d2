//! Time parsing and formatting utilities
//!
//! Converts between whole seconds and the `MM:SS` / `H:MM:SS` strings shown on the
//! trim handles and sent to the processing endpoint.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::errors::DomainError;

/// Time strings the processing endpoint accepts
static WELL_FORMED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+:)?[0-5]?\d:[0-5]\d$").expect("valid regex"));

/// Seconds <-> time-string codec
pub struct TimeCodec;

impl TimeCodec {
    /// Format seconds as `MM:SS`, or `H:MM:SS` once the value reaches an hour.
    ///
    /// Rounds to the nearest whole second. Negative and non-finite input formats as zero.
    pub fn format(seconds: f64) -> String {
        let total = Self::whole_seconds(seconds);
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let secs = total % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, secs)
        } else {
            format!("{:02}:{:02}", minutes, secs)
        }
    }

    /// Parse `MM:SS` or `H:MM:SS` into total seconds
    pub fn parse(time_str: &str) -> Result<u64, DomainError> {
        let parts: Vec<&str> = time_str.split(':').collect();
        let values = parts
            .iter()
            .map(|part| Self::parse_segment(part, time_str))
            .collect::<Result<Vec<u64>, DomainError>>()?;

        let total = match values.as_slice() {
            [minutes, seconds] => minutes
                .checked_mul(60)
                .and_then(|m| m.checked_add(*seconds)),
            [hours, minutes, seconds] => hours
                .checked_mul(3600)
                .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
                .and_then(|hm| hm.checked_add(*seconds)),
            _ => {
                return Err(DomainError::InvalidFormat(format!(
                    "'{}' has {} segments, expected MM:SS or H:MM:SS",
                    time_str,
                    parts.len()
                )))
            }
        };

        total.ok_or_else(|| {
            DomainError::InvalidFormat(format!("'{}' overflows the seconds counter", time_str))
        })
    }

    /// Parse with the legacy fallback: malformed input reads as zero
    pub fn parse_or_zero(time_str: &str) -> u64 {
        Self::parse(time_str).unwrap_or_else(|e| {
            debug!(input = time_str, error = %e, "treating malformed time string as 0");
            0
        })
    }

    /// Whether the string matches the endpoint's acceptance grammar
    pub fn is_well_formed(time_str: &str) -> bool {
        WELL_FORMED_RE.is_match(time_str)
    }

    /// Round to whole seconds, clamping negative and non-finite values to zero
    pub fn whole_seconds(seconds: f64) -> u64 {
        if seconds.is_finite() && seconds > 0.0 {
            seconds.round() as u64
        } else {
            0
        }
    }

    fn parse_segment(segment: &str, time_str: &str) -> Result<u64, DomainError> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidFormat(format!(
                "'{}' contains a non-numeric segment '{}'",
                time_str, segment
            )));
        }
        segment.parse::<u64>().map_err(|_| {
            DomainError::InvalidFormat(format!(
                "'{}' has an out-of-range segment '{}'",
                time_str, segment
            ))
        })
    }
}
