use crate::modules::call_site::CallSite;
use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Error,
}

impl Level {
    /// Tag written before the call-site.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Debug => "",
            Level::Error => "Error - ",
        }
    }
}

/// `<prefix><file>:<line> | <message>`, the text shown on the console.
/// Line breaks in `message` are written as `\n` / `\r` so a record is one line.
pub fn compose(level: Level, site: &CallSite, message: &str) -> String {
    format!("{}{} | {}", level.prefix(), site, escape_line_breaks(message))
}

fn escape_line_breaks(message: &str) -> Cow<'_, str> {
    if !message.contains(['\n', '\r']) {
        return Cow::Borrowed(message);
    }
    let mut escaped = String::with_capacity(message.len() + 4);
    for ch in message.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.123Z`.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The record appended to the log file (without the newline).
pub fn persisted(now: DateTime<Utc>, composed: &str) -> String {
    format!("{} - {}", timestamp(now), composed)
}
