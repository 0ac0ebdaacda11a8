//! Command-line frontend for the chronotag core.
//!
//! Three resolution commands mirror the core's three epoch modes, plus a
//! `formats` listing of the available tag styles. All temporal logic lives
//! in the library; this binary only parses arguments, calls the core, and
//! prints the result as text or JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chronotag::{
    parse_date, parse_duration, parse_time, render_tag, resolve_absolute_epoch,
    resolve_offset_epoch, resolve_relative_epoch, resolve_timezone, TimestampStyle,
};

#[derive(Parser)]
#[command(
    name = "chronotag",
    version,
    about = "Convert dates, durations, and offsets into dynamic timestamp tags"
)]
struct Cli {
    /// Emit the result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a specific date and time to a timestamp tag
    At {
        /// Date: YYYY-MM-DD, DD.MM.YYYY, or DD/MM/YYYY
        date: String,

        /// Time of day: HH:MM or HH:MM:SS (defaults to midnight)
        #[arg(long)]
        time: Option<String>,

        /// Timezone: IANA name or alias (UTC, GMT+3, EST, ...)
        #[arg(long)]
        tz: Option<String>,

        /// Tag style code: t, T, d, D, f, F, R
        #[arg(long, default_value = "F")]
        style: TimestampStyle,
    },

    /// Resolve a duration from now to a timestamp tag
    In {
        /// Duration: 90m, 2h, 1d12h, 1w, 3d4h30m, ...
        duration: String,

        /// Tag style code: t, T, d, D, f, F, R
        #[arg(long, default_value = "R")]
        style: TimestampStyle,
    },

    /// Resolve the current time, optionally shifted, to a timestamp tag
    Now {
        /// Signed offset from now: +2h, -30m, +1d, ...
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,

        /// Timezone: IANA name or alias (UTC, GMT+3, EST, ...)
        #[arg(long)]
        tz: Option<String>,

        /// Tag style code: t, T, d, D, f, F, R
        #[arg(long, default_value = "F")]
        style: TimestampStyle,
    },

    /// List the available tag style codes
    Formats,
}

/// One resolved timestamp, as printed to stdout.
#[derive(Serialize)]
struct Resolved {
    epoch: i64,
    tag: String,
    style: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone: Option<String>,
}

impl Resolved {
    fn new(epoch: i64, style: TimestampStyle, zone: Option<String>) -> Self {
        Resolved {
            epoch,
            tag: render_tag(epoch, style),
            style: style.code(),
            zone,
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
        } else {
            println!("{}", self.tag);
            println!("epoch: {}", self.epoch);
            if let Some(zone) = &self.zone {
                println!("zone: {zone}");
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::At {
            date,
            time,
            tz,
            style,
        } => {
            let components = parse_date(&date)?;
            let clock = parse_time(time.as_deref())?;
            let zone = resolve_timezone(tz.as_deref());
            let epoch = resolve_absolute_epoch(&components, &clock, &zone)?;
            tracing::info!(%date, ?time, %zone, epoch, "resolved absolute timestamp");
            Resolved::new(epoch, style, Some(zone)).print(cli.json)?;
        }
        Command::In { duration, style } => {
            let seconds = parse_duration(&duration)?;
            let epoch = resolve_relative_epoch(seconds);
            tracing::info!(%duration, seconds, epoch, "resolved relative timestamp");
            Resolved::new(epoch, style, None).print(cli.json)?;
        }
        Command::Now { offset, tz, style } => {
            let zone = resolve_timezone(tz.as_deref());
            let epoch = resolve_offset_epoch(offset.as_deref(), &zone)?;
            tracing::info!(?offset, %zone, epoch, "resolved offset timestamp");
            Resolved::new(epoch, style, Some(zone)).print(cli.json)?;
        }
        Command::Formats => {
            for style in TimestampStyle::ALL {
                println!("{}  {}", style.code(), style.label());
            }
        }
    }

    Ok(())
}
