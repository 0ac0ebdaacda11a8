//! Platform timestamp-tag rendering.
//!
//! The rendered surface is a markup tag `<t:EPOCH:CODE>` with one of seven
//! single-character format codes. How the platform displays each code is
//! its own concern; this module only owns the code set and tag syntax.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChronotagError;

/// The seven display styles a rendered timestamp tag can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimestampStyle {
    /// `t` — e.g. "16:20"
    ShortTime,
    /// `T` — e.g. "16:20:30"
    LongTime,
    /// `d` — e.g. "20/04/2021"
    ShortDate,
    /// `D` — e.g. "20 April 2021"
    LongDate,
    /// `f` — e.g. "20 April 2021 16:20"
    ShortDateTime,
    /// `F` — e.g. "Tuesday, 20 April 2021 16:20"
    #[default]
    LongDateTime,
    /// `R` — e.g. "2 months ago"
    Relative,
}

impl TimestampStyle {
    pub const ALL: [TimestampStyle; 7] = [
        TimestampStyle::ShortTime,
        TimestampStyle::LongTime,
        TimestampStyle::ShortDate,
        TimestampStyle::LongDate,
        TimestampStyle::ShortDateTime,
        TimestampStyle::LongDateTime,
        TimestampStyle::Relative,
    ];

    /// The single-character code embedded in the tag.
    pub fn code(self) -> char {
        match self {
            TimestampStyle::ShortTime => 't',
            TimestampStyle::LongTime => 'T',
            TimestampStyle::ShortDate => 'd',
            TimestampStyle::LongDate => 'D',
            TimestampStyle::ShortDateTime => 'f',
            TimestampStyle::LongDateTime => 'F',
            TimestampStyle::Relative => 'R',
        }
    }

    /// Human-readable name of the style.
    pub fn label(self) -> &'static str {
        match self {
            TimestampStyle::ShortTime => "Short Time",
            TimestampStyle::LongTime => "Long Time",
            TimestampStyle::ShortDate => "Short Date",
            TimestampStyle::LongDate => "Long Date",
            TimestampStyle::ShortDateTime => "Short Date/Time",
            TimestampStyle::LongDateTime => "Long Date/Time",
            TimestampStyle::Relative => "Relative Time",
        }
    }
}

impl FromStr for TimestampStyle {
    type Err = ChronotagError;

    /// Codes are case-sensitive: `t` and `T` are different styles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" => Ok(TimestampStyle::ShortTime),
            "T" => Ok(TimestampStyle::LongTime),
            "d" => Ok(TimestampStyle::ShortDate),
            "D" => Ok(TimestampStyle::LongDate),
            "f" => Ok(TimestampStyle::ShortDateTime),
            "F" => Ok(TimestampStyle::LongDateTime),
            "R" => Ok(TimestampStyle::Relative),
            other => Err(ChronotagError::InvalidTimeFormat(other.to_string())),
        }
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Render the platform markup tag for an epoch and style.
///
/// ```
/// use chronotag::{render_tag, TimestampStyle};
///
/// assert_eq!(render_tag(1_759_321_800, TimestampStyle::Relative), "<t:1759321800:R>");
/// ```
pub fn render_tag(epoch: i64, style: TimestampStyle) -> String {
    format!("<t:{epoch}:{}>", style.code())
}

// ── Tests ───────────────────────────────────────────────────────────────────
