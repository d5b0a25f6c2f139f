//! Console logging with the caller's `file:line`, optionally mirrored to a
//! flat append-only log file.
//!
//! ```no_run
//! use sitelog::{log_debug, log_error};
//!
//! log_debug("starting up", false);
//! log_error("disk full", true);
//! ```
//!
//! Lines look like `src/main.rs:12 | starting up` on the console and
//! `2024-05-01T12:00:00.123Z - Error - src/main.rs:13 | disk full` in the
//! log file (`logs` unless `SITELOG_FILE` or [`config::init`] says otherwise).

pub mod modules;

pub use modules::call_site::CallSite;
pub use modules::config::{self, LoggerConfig};
pub use modules::line::Level;
pub use modules::logger::{
    log_debug, log_debug_at, log_error, log_error_at, LogStatus, Logger, PERSIST_FAILED_MSG,
};

/// `format!`-style debug line. Start with `persist;` to also append it to the log file.
#[macro_export]
macro_rules! log_d {
    (persist; $($arg:tt)*) => {
        $crate::log_debug(&::std::format!($($arg)*), true)
    };
    ($($arg:tt)*) => {
        $crate::log_debug(&::std::format!($($arg)*), false)
    };
}

/// `format!`-style error line. Start with `persist;` to also append it to the log file.
#[macro_export]
macro_rules! log_e {
    (persist; $($arg:tt)*) => {
        $crate::log_error(&::std::format!($($arg)*), true)
    };
    ($($arg:tt)*) => {
        $crate::log_error(&::std::format!($($arg)*), false)
    };
}
