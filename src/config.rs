//! Runtime configuration
//!
//! Layered as defaults, then an optional TOML file, then `PYTHONIC_LOG_*`
//! environment overrides.

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::Level;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default = "default_false")]
    pub json: bool,

    /// Emit span enter/close events
    #[serde(default = "default_false")]
    pub spans: bool,

    /// Write to this file instead of stderr
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            spans: false,
            file: None,
        }
    }
}

impl LogSettings {
    /// Parsed level; unknown names fall back to INFO.
    pub fn level(&self) -> Level {
        match self.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl RuntimeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("PYTHONIC_LOG_LEVEL") {
            self.log.level = level;
        }

        if let Some(val) = lookup("PYTHONIC_LOG_JSON") {
            self.log.json = is_enabled(&val);
        }

        if let Some(val) = lookup("PYTHONIC_LOG_SPANS") {
            self.log.spans = is_enabled(&val);
        }

        if let Some(path) = lookup("PYTHONIC_LOG_FILE") {
            self.log.file = Some(path);
        }
    }
}

fn is_enabled(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

fn default_level() -> String {
    "info".to_string()
}

fn default_false() -> bool {
    false
}
