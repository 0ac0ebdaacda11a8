//! # chronotag
//!
//! Parsing and temporal-resolution core for platform-rendered dynamic
//! timestamps.
//!
//! Four small grammars (date, time, duration, timezone alias) feed one
//! resolver that combines their outputs into absolute Unix epoch seconds
//! under an explicit or default timezone. The crate takes plain strings in
//! and hands an epoch integer (or a typed error) back; everything around
//! it — command registration, interactive UI, message rendering — is an
//! external collaborator.
//!
//! Validation is deliberately two-phase: the parsers accept anything
//! shape-valid (`"2025-13-01"` parses) and the resolver rejects what the
//! calendar cannot realize, so callers can tell a malformed token apart
//! from an impossible date.
//!
//! ## Modules
//!
//! - [`date`] — date token → year/month/day fields
//! - [`time`] — optional time token → hour/minute/second fields
//! - [`duration`] — compound duration token → total seconds
//! - [`timezone`] — user-facing alias → canonical IANA zone identifier
//! - [`epoch`] — the three resolution modes (absolute, relative, offset)
//! - [`format`] — timestamp-tag styles and `<t:EPOCH:CODE>` rendering
//! - [`error`] — error types

pub mod date;
pub mod duration;
pub mod epoch;
pub mod error;
pub mod format;
pub mod time;
pub mod timezone;

pub use date::{parse_date, DateComponents};
pub use duration::parse_duration;
pub use epoch::{
    resolve_absolute_epoch, resolve_offset_epoch, resolve_offset_epoch_at, resolve_relative_epoch,
    resolve_relative_epoch_at,
};
pub use error::{ChronotagError, Result};
pub use format::{render_tag, TimestampStyle};
pub use time::{parse_time, TimeComponents};
pub use timezone::{resolve_timezone, DEFAULT_TIMEZONE};
