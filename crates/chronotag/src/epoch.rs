//! Epoch resolution: combining parsed components into Unix epoch seconds.
//!
//! Three independent composition modes, each a pure function from parsed
//! inputs to an epoch integer:
//!
//! - [`resolve_absolute_epoch`] — civil date + time + zone → epoch
//! - [`resolve_relative_epoch`] — `now(UTC) + duration` → epoch
//! - [`resolve_offset_epoch`] — `now(zone) ± optional offset` → epoch
//!
//! The `now`-based modes sample the wall clock exactly once per invocation.
//! Each has an `_at` twin taking an explicit anchor so callers (and tests)
//! can supply the instant themselves, keeping the computation clock-free.
//! Sub-second precision is truncated, never rounded: every returned value
//! is a whole-second instant.

use chrono::{DateTime, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::date::DateComponents;
use crate::error::{ChronotagError, Result};
use crate::time::TimeComponents;

/// Resolve an absolute civil datetime in a zone to epoch seconds.
///
/// This is where the deferred validation from the parsers lands: a
/// syntactically valid but unrealizable combination (month 13, February 31,
/// hour 99, a spring-forward gap) fails with
/// [`ChronotagError::InvalidCalendarDate`], and an identifier the zone
/// database does not know fails with [`ChronotagError::InvalidTimezone`].
///
/// Wall times made ambiguous by a DST fall-back resolve to the earlier of
/// the two instants.
///
/// # Examples
///
/// ```
/// use chronotag::{parse_date, parse_time, resolve_absolute_epoch};
///
/// let date = parse_date("2025-10-01").unwrap();
/// let time = parse_time(Some("15:30")).unwrap();
/// let epoch = resolve_absolute_epoch(&date, &time, "Europe/Istanbul").unwrap();
/// assert_eq!(epoch, 1_759_321_800); // 2025-10-01T15:30:00+03:00
/// ```
pub fn resolve_absolute_epoch(
    date: &DateComponents,
    time: &TimeComponents,
    timezone: &str,
) -> Result<i64> {
    let tz = lookup_zone(timezone)?;

    let civil = NaiveDate::from_ymd_opt(date.year, date.month, date.day)
        .and_then(|d| d.and_hms_opt(time.hour, time.minute, time.second))
        .ok_or_else(|| {
            ChronotagError::InvalidCalendarDate(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                date.year, date.month, date.day, time.hour, time.minute, time.second
            ))
        })?;

    let resolved = match tz.from_local_datetime(&civil) {
        LocalResult::Single(dt) => dt,
        // Fall-back repeats the wall time; take the first occurrence.
        LocalResult::Ambiguous(earlier, _) => earlier,
        // Spring-forward gap: the wall time never exists in this zone.
        LocalResult::None => {
            return Err(ChronotagError::InvalidCalendarDate(format!(
                "{civil} does not exist in {timezone}"
            )));
        }
    };

    Ok(resolved.timestamp())
}

/// Resolve `now(UTC) + duration` to epoch seconds.
///
/// The clock is sampled exactly once. `duration_seconds` comes from
/// [`parse_duration`](crate::parse_duration) and is therefore strictly
/// positive, but any value is accepted here; additions that would leave
/// the representable range saturate.
pub fn resolve_relative_epoch(duration_seconds: u64) -> i64 {
    resolve_relative_epoch_at(Utc::now(), duration_seconds)
}

/// [`resolve_relative_epoch`] with an explicit `now` anchor.
pub fn resolve_relative_epoch_at(now: DateTime<Utc>, duration_seconds: u64) -> i64 {
    now.timestamp()
        .saturating_add(clamp_seconds(duration_seconds))
}

/// Resolve `now(zone) ± optional offset` to epoch seconds.
///
/// `offset` is a duration token optionally prefixed with `+` or `-`; a
/// missing sign means positive, and a missing token means the current
/// instant. The zone affects only how a caller would render the civil
/// "now" — instants are zone-independent — but the identifier is still
/// validated, failing with [`ChronotagError::InvalidTimezone`] when it
/// names no real zone. Offset parse failures propagate from
/// [`parse_duration`](crate::parse_duration).
pub fn resolve_offset_epoch(offset: Option<&str>, timezone: &str) -> Result<i64> {
    resolve_offset_epoch_at(Utc::now(), offset, timezone)
}

/// [`resolve_offset_epoch`] with an explicit `now` anchor.
pub fn resolve_offset_epoch_at(
    now: DateTime<Utc>,
    offset: Option<&str>,
    timezone: &str,
) -> Result<i64> {
    let tz = lookup_zone(timezone)?;
    let local_now = now.with_timezone(&tz);
    let mut epoch = local_now.timestamp();

    if let Some(raw) = offset.filter(|s| !s.is_empty()) {
        let trimmed = raw.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'+') => (false, &trimmed[1..]),
            Some(b'-') => (true, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let seconds = clamp_seconds(crate::duration::parse_duration(body)?);
        epoch = if negative {
            epoch.saturating_sub(seconds)
        } else {
            epoch.saturating_add(seconds)
        };
    }

    Ok(epoch)
}

/// Look up a zone identifier in the tz database.
fn lookup_zone(timezone: &str) -> Result<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|_| ChronotagError::InvalidTimezone(timezone.to_string()))
}

/// Narrow a duration to the epoch arithmetic type without wrapping.
fn clamp_seconds(seconds: u64) -> i64 {
    i64::try_from(seconds).unwrap_or(i64::MAX)
}

// ── Tests ───────────────────────────────────────────────────────────────────
