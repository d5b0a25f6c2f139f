use crate::modules::call_site::CallSite;
use crate::modules::config::{self, LoggerConfig};
use crate::modules::line::{self, Level};
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

/// Printed on the error sink when a persisted line could not be appended.
pub const PERSIST_FAILED_MSG: &str = "Write to customLog File failed";

/// What happened to a single log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    /// Console only; nothing was asked to go to the file.
    Printed,
    /// Console and log file.
    Persisted,
    /// Console written, file append failed and was reported.
    PersistFailed,
}

/// Console line writer with an optional append to the configured log file.
pub struct Logger<'a, O: Write, E: Write> {
    config: &'a LoggerConfig,
    out: O,
    err: E,
}

impl Logger<'static, Stdout, Stderr> {
    /// Global config, real stdout/stderr. Each write takes only its own stream's lock.
    pub fn stdio() -> Self {
        Self::with_sinks(config::global(), io::stdout(), io::stderr())
    }
}

impl<'a, O: Write, E: Write> Logger<'a, O, E> {
    pub fn with_sinks(config: &'a LoggerConfig, out: O, err: E) -> Self {
        Self { config, out, err }
    }

    /// Give the sinks back (tests read what was written).
    pub fn into_sinks(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Write one line for `site` and, if `persist`, append it to the log file.
    /// Never fails; the outcome is reported through the returned status.
    pub fn emit(&mut self, level: Level, site: &CallSite, message: &str, persist: bool) -> LogStatus {
        let composed = line::compose(level, site, message);
        let sink: &mut dyn Write = match level {
            Level::Debug => &mut self.out,
            Level::Error => &mut self.err,
        };
        // Console failures (closed pipe etc.) are not the caller's problem.
        let _ = writeln!(sink, "{}", composed).and_then(|_| sink.flush());

        if !persist {
            return LogStatus::Printed;
        }

        let record = line::persisted(Utc::now(), &composed);
        match append_to_file(self.config.log_path(), &record) {
            Ok(()) => LogStatus::Persisted,
            Err(err) => {
                log::debug!(
                    "sitelog: appending to {} failed: {:?}",
                    self.config.log_path().display(),
                    err
                );
                let _ = writeln!(self.err, "{}", PERSIST_FAILED_MSG).and_then(|_| self.err.flush());
                LogStatus::PersistFailed
            }
        }
    }

    #[track_caller]
    pub fn debug(&mut self, message: &str, persist: bool) -> LogStatus {
        self.emit(Level::Debug, &CallSite::here(), message, persist)
    }

    #[track_caller]
    pub fn error(&mut self, message: &str, persist: bool) -> LogStatus {
        self.emit(Level::Error, &CallSite::here(), message, persist)
    }
}

/// Append `line` plus a newline in a single write so records never split.
pub fn append_to_file(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut record = String::with_capacity(line.len() + 1);
    record.push_str(line);
    record.push('\n');
    file.write_all(record.as_bytes())
}

/// Print `<file>:<line> | message` to stdout, optionally also to the log file.
#[track_caller]
pub fn log_debug(message: &str, persist: bool) -> LogStatus {
    log_debug_at(&CallSite::here(), message, persist)
}

/// Print `Error - <file>:<line> | message` to stderr, optionally also to the log file.
#[track_caller]
pub fn log_error(message: &str, persist: bool) -> LogStatus {
    log_error_at(&CallSite::here(), message, persist)
}

pub fn log_debug_at(site: &CallSite, message: &str, persist: bool) -> LogStatus {
    Logger::stdio().emit(Level::Debug, site, message, persist)
}

pub fn log_error_at(site: &CallSite, message: &str, persist: bool) -> LogStatus {
    Logger::stdio().emit(Level::Error, site, message, persist)
}
