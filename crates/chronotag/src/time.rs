//! Time-of-day token parsing.
//!
//! Two grammars, tried in order: `HH:MM:SS` then `HH:MM`. A missing or empty
//! token means midnight, never an error. As with dates, fields are not
//! range-checked here — `"99:99"` parses and is rejected only at calendar
//! construction.

use serde::Serialize;

use crate::date::{parse_digits, split_three};
use crate::error::{ChronotagError, Result};

/// Time-of-day fields as written by the user, before any range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeComponents {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeComponents {
    /// Midnight, the default when no time token is supplied.
    pub const MIDNIGHT: TimeComponents = TimeComponents {
        hour: 0,
        minute: 0,
        second: 0,
    };
}

/// Parse an optional time token.
///
/// `None` or an empty string yields `(0, 0, 0)`. A non-empty token is
/// trimmed and matched against `HH:MM:SS`, then `HH:MM` (1–2 digits per
/// field); anything else fails with [`ChronotagError::InvalidTimeFormat`].
///
/// # Examples
///
/// ```
/// use chronotag::{parse_time, TimeComponents};
///
/// assert_eq!(parse_time(None).unwrap(), TimeComponents::MIDNIGHT);
/// let t = parse_time(Some("15:30")).unwrap();
/// assert_eq!((t.hour, t.minute, t.second), (15, 30, 0));
/// ```
pub fn parse_time(text: Option<&str>) -> Result<TimeComponents> {
    let Some(raw) = text else {
        return Ok(TimeComponents::MIDNIGHT);
    };
    if raw.is_empty() {
        return Ok(TimeComponents::MIDNIGHT);
    }

    let s = raw.trim();

    // HH:MM:SS
    if let Some((h, m, sec)) = split_three(s, ':') {
        if let (Some(hour), Some(minute), Some(second)) = (
            parse_digits(h, 1, 2),
            parse_digits(m, 1, 2),
            parse_digits(sec, 1, 2),
        ) {
            return Ok(TimeComponents {
                hour,
                minute,
                second,
            });
        }
    }

    // HH:MM
    if let Some((h, m)) = split_two(s, ':') {
        if let (Some(hour), Some(minute)) = (parse_digits(h, 1, 2), parse_digits(m, 1, 2)) {
            return Ok(TimeComponents {
                hour,
                minute,
                second: 0,
            });
        }
    }

    Err(ChronotagError::InvalidTimeFormat(s.to_string()))
}

/// Split into exactly two fields on `sep`.
fn split_two(s: &str, sep: char) -> Option<(&str, &str)> {
    let mut parts = s.split(sep);
    let a = parts.next()?;
    let b = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

// ── Tests ───────────────────────────────────────────────────────────────────
