//! Line format of the support log.
//!
//! ```text
//! [Checker] 2026-10-19 08:30:05.042 found update 2.4.1
//! ```
//!
//! Line breaks inside a message are escaped so one call is always one line.

use std::fmt;

use chrono::{DateTime, TimeZone};

use wraplog_core::Tag;

/// Timestamp layout, millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Render one newline-terminated log line.
pub fn format_line<Tz>(tag: &Tag, at: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "[{tag}] {} {}\n",
        at.format(TIMESTAMP_FORMAT),
        escape_line_breaks(message)
    )
}

fn escape_line_breaks(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
