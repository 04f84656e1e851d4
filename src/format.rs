use chrono::{DateTime, Local};

use crate::level::Level;

/// A single log record as captured at the call site.
#[derive(Debug)]
pub struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: &'a str,
    pub file: &'a str,
    pub line: u32,
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub const RESET: &str = "\x1b[0m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const PURPLE: &str = "\x1b[35m";

fn color_for(level: Level) -> &'static str {
    match level {
        Level::Debug => BLUE,
        Level::Info => GREEN,
        Level::Warning => YELLOW,
        Level::Error => RED,
        Level::Critical => PURPLE,
    }
}

/// Fixed plain line format: `<timestamp> - <LEVEL> - <message> - (<file>:<line>)`.
pub fn plain(record: &Record<'_>) -> String {
    format!(
        "{} - {} - {} - ({}:{})",
        record.timestamp.format(TIMESTAMP_FORMAT),
        record.level,
        record.message,
        record.file,
        record.line,
    )
}

/// Plain line wrapped in the severity's ANSI color, reset afterward.
/// Console only; the file sink must never receive this.
pub fn colored(record: &Record<'_>) -> String {
    format!("{}{}{}", color_for(record.level), plain(record), RESET)
}
