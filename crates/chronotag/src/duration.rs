//! Compound duration parsing.
//!
//! The grammar is a sequence of `<digits><unit>` tokens with unit one of
//! `w`, `d`, `h`, `m`, `s` — e.g. `90m`, `2h`, `1d12h`, `3d4h30m`. The scan
//! is permissive: tokens are extracted wherever they occur and characters
//! between or around them are skipped, so `"2h garbage 3m"` parses as
//! 2h + 3m. Tightening this to whole-string matching would change which
//! inputs are accepted; callers rely on the scan behavior as-is.

use crate::error::{ChronotagError, Result};

/// Seconds per unit: w, d, h, m, s.
fn unit_multiplier(unit: u8) -> Option<u64> {
    match unit {
        b'w' => Some(604_800),
        b'd' => Some(86_400),
        b'h' => Some(3_600),
        b'm' => Some(60),
        b's' => Some(1),
        _ => None,
    }
}

/// Parse a compound duration token into total seconds.
///
/// Input is trimmed and lowercased, then scanned for `<digits><unit>`
/// tokens. Fails with [`ChronotagError::InvalidDurationFormat`] when no
/// token is found (or a value is too large to represent), and with
/// [`ChronotagError::NonPositiveDuration`] when the tokens sum to zero —
/// a duration must be strictly positive.
///
/// # Examples
///
/// ```
/// use chronotag::parse_duration;
///
/// assert_eq!(parse_duration("90m").unwrap(), 5400);
/// assert_eq!(parse_duration("1d12h").unwrap(), 129_600);
/// assert!(parse_duration("0m").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<u64> {
    let s = text.trim().to_lowercase();
    let bytes = s.as_bytes();

    let mut total: u64 = 0;
    let mut found = false;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        // A digit run only forms a token when immediately followed by a unit;
        // otherwise it is skipped like any other non-matching character.
        let Some(mult) = bytes.get(i).copied().and_then(unit_multiplier) else {
            continue;
        };

        let value: u64 = s[start..i]
            .parse()
            .map_err(|_| ChronotagError::InvalidDurationFormat(s.clone()))?;
        total = value
            .checked_mul(mult)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(|| ChronotagError::InvalidDurationFormat(s.clone()))?;
        found = true;
        i += 1;
    }

    if !found {
        return Err(ChronotagError::InvalidDurationFormat(s));
    }
    if total == 0 {
        return Err(ChronotagError::NonPositiveDuration(s));
    }
    Ok(total)
}

// ── Tests ───────────────────────────────────────────────────────────────────
