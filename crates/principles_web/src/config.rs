//! Web server configuration.

use principles_core::config::non_blank_value;
use principles_core::CatalogConfig;
use std::path::PathBuf;

pub const BIND_ENV: &str = "PRINCIPLES_WEB_BIND";
pub const STATIC_DIR_ENV: &str = "PRINCIPLES_STATIC_DIR";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const STYLESHEET_FILE_NAME: &str = "style.css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub catalog: CatalogConfig,
    pub bind: String,
    /// Directory holding `style.css`.
    pub static_dir: PathBuf,
}

impl WebConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| non_blank_value(lookup(key));

        Self {
            catalog: CatalogConfig::from_lookup(&lookup),
            bind: read(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string()),
            static_dir: read(STATIC_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")),
        }
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.static_dir.join(STYLESHEET_FILE_NAME)
    }
}
