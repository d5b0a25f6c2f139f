use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// -------------------- Config --------------------
const DEFAULT_LOG_FILE: &str = "logs";
const LOG_FILE_ENV: &str = "SITELOG_FILE";

static GLOBAL: OnceLock<LoggerConfig> = OnceLock::new();

/// Where persisted lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_path: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl LoggerConfig {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Read `SITELOG_FILE` (after loading `.env` if there is one).
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_var(env::var(LOG_FILE_ENV).ok())
    }

    fn from_var(value: Option<String>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::new(path.trim()),
            _ => Self::default(),
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Install the process-wide configuration. Only the first call wins; later
/// calls get their config handed back.
pub fn init(config: LoggerConfig) -> Result<(), LoggerConfig> {
    GLOBAL.set(config)
}

/// The process-wide configuration, falling back to the environment when
/// `init` was never called.
pub fn global() -> &'static LoggerConfig {
    GLOBAL.get_or_init(LoggerConfig::from_env)
}
