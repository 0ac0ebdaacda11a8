//! Date token parsing.
//!
//! Three surface grammars, tried in fixed priority order:
//!
//! 1. `YYYY-MM-DD` — ISO-style, 4-digit year first
//! 2. `DD.MM.YYYY` — dot-separated, day first
//! 3. `DD/MM/YYYY` — slash-separated, day first
//!
//! The parser is purely syntactic: `"2025-13-01"` is accepted here and only
//! rejected later when a calendar date is constructed. This two-phase split
//! lets callers distinguish a malformed token ([`InvalidDateFormat`]) from a
//! well-formed but unrealizable date (`InvalidCalendarDate`).
//!
//! [`InvalidDateFormat`]: crate::ChronotagError::InvalidDateFormat

use serde::Serialize;

use crate::error::{ChronotagError, Result};

/// Calendar date fields as written by the user, before any range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Parse a date token into its year/month/day fields.
///
/// Input is trimmed of surrounding whitespace before matching. The first
/// grammar whose shape matches wins; any other shape fails with
/// [`ChronotagError::InvalidDateFormat`].
///
/// # Examples
///
/// ```
/// use chronotag::parse_date;
///
/// let d = parse_date("2025-10-01").unwrap();
/// assert_eq!((d.year, d.month, d.day), (2025, 10, 1));
/// assert_eq!(parse_date("01.10.2025").unwrap(), d);
/// assert_eq!(parse_date("01/10/2025").unwrap(), d);
/// ```
pub fn parse_date(text: &str) -> Result<DateComponents> {
    let s = text.trim();

    // YYYY-MM-DD (priority)
    if let Some((a, b, c)) = split_three(s, '-') {
        if let (Some(year), Some(month), Some(day)) = (
            parse_digits(a, 4, 4),
            parse_digits(b, 1, 2),
            parse_digits(c, 1, 2),
        ) {
            return Ok(DateComponents {
                year: year as i32,
                month,
                day,
            });
        }
    }

    // DD.MM.YYYY
    if let Some((a, b, c)) = split_three(s, '.') {
        if let (Some(day), Some(month), Some(year)) = (
            parse_digits(a, 1, 2),
            parse_digits(b, 1, 2),
            parse_digits(c, 4, 4),
        ) {
            return Ok(DateComponents {
                year: year as i32,
                month,
                day,
            });
        }
    }

    // DD/MM/YYYY
    if let Some((a, b, c)) = split_three(s, '/') {
        if let (Some(day), Some(month), Some(year)) = (
            parse_digits(a, 1, 2),
            parse_digits(b, 1, 2),
            parse_digits(c, 4, 4),
        ) {
            return Ok(DateComponents {
                year: year as i32,
                month,
                day,
            });
        }
    }

    Err(ChronotagError::InvalidDateFormat(s.to_string()))
}

/// Split into exactly three fields on `sep`; more or fewer is a non-match.
pub(crate) fn split_three(s: &str, sep: char) -> Option<(&str, &str, &str)> {
    let mut parts = s.split(sep);
    let a = parts.next()?;
    let b = parts.next()?;
    let c = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b, c))
}

/// Parse an all-ASCII-digit field whose length is within `[min, max]`.
pub(crate) fn parse_digits(s: &str, min: usize, max: usize) -> Option<u32> {
    if s.len() < min || s.len() > max || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ── Tests ───────────────────────────────────────────────────────────────────
