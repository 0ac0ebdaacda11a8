//! Error types for chronotag operations.

use thiserror::Error;

/// Every parser and resolver failure, carrying the offending raw input so
/// a calling layer can build its own user-facing message. All variants are
/// locally recoverable; nothing here is fatal to a hosting process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChronotagError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid duration format: {0}")]
    InvalidDurationFormat(String),

    #[error("Duration must be positive: {0}")]
    NonPositiveDuration(String),

    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ChronotagError>;
