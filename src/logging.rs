//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `REPOSMITH_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Lines look like `[INFO] message` and go to stderr. With `no_emoji` every
//! non-ASCII character is replaced by `?` before the line is written.

use std::fmt::{self, Write as _};
use std::io::IsTerminal;
use anyhow::{anyhow, Result};
use clap::ValueEnum;
use colored::Colorize;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[value(alias = "critical")]
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Explicit output settings handed to [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: Level,
    pub no_emoji: bool,
    pub color: bool,
}

impl LogSettings {
    pub fn new(cli_level: Option<LogLevel>, no_emoji: bool) -> LogSettings {
        let level = match cli_level {
            Some(lvl) => level_from_log_level(lvl),
            None => std::env::var("REPOSMITH_LOG")
                .ok()
                .and_then(|s| parse_level_str(&s))
                .unwrap_or(Level::INFO),
        };
        LogSettings {
            level,
            no_emoji,
            color: std::io::stderr().is_terminal(),
        }
    }
}

/// Initialise the global logging subscriber.
///
/// Call once at startup.
pub fn init_logging(settings: LogSettings) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        .with_writer(std::io::stderr)
        .event_format(LineFormat {
            no_emoji: settings.no_emoji,
            color: settings.color,
        })
        .try_init()
        .map_err(|e| anyhow!("could not initialise logging: {e}"))
}

/// `[LEVEL] message` formatter.
struct LineFormat {
    no_emoji: bool,
    color: bool,
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;
        if self.no_emoji {
            message = ascii_only(&message);
        }
        let level = *event.metadata().level();
        let tag = format!("[{}]", level);
        if self.color {
            writeln!(writer, "{} {}", paint(level, &tag), message)
        } else {
            writeln!(writer, "{} {}", tag, message)
        }
    }
}

fn paint(level: Level, tag: &str) -> colored::ColoredString {
    if level == Level::ERROR {
        tag.red().bold()
    } else if level == Level::WARN {
        tag.yellow()
    } else if level == Level::INFO {
        tag.green()
    } else {
        tag.dimmed()
    }
}

/// Replaces every non-ASCII character with `?`.
pub fn ascii_only(s: &str) -> String {
    s.chars().map(|c| if c.is_ascii() { c } else { '?' }).collect()
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        "critical" => Some(Level::ERROR),
        _ => None,
    }
}
