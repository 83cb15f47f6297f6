//! Environment-driven configuration shared by the web server and console.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Lookup is injectable so tests never touch the process environment.

use crate::logging::{default_log_level, LogSink};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "PRINCIPLES_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "PRINCIPLES_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PRINCIPLES_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "principles.db";

/// Store and logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Directory for rolling log files; `None` leaves the choice of sink to
    /// the binary.
    pub log_dir: Option<String>,
}

impl CatalogConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| non_blank_value(lookup(key));

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV),
        }
    }

    /// Returns the file sink when a log directory is configured.
    pub fn log_sink(&self) -> Option<LogSink<'_>> {
        self.log_dir.as_deref().map(LogSink::Directory)
    }
}

/// Trims an optional raw value and drops it when blank.
pub fn non_blank_value(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
