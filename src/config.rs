use serde::Deserialize;
use std::fs;
use std::io;
use thiserror::Error;
use tracing::warn;

use crate::model::ANALYSIS_WINDOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Artificial pause between the loading placeholders and the results.
    pub render_delay_ms: u64,
    /// Days of mock history to generate, not counting today.
    pub history_days: u32,
    /// Fixed seed for reproducible runs; random when absent.
    pub rng_seed: Option<u64>,
    pub output_format: OutputFormat,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            render_delay_ms: 1500,
            history_days: 90,
            rng_seed: None,
            output_format: OutputFormat::Text,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("history_days must be at least {min}, got {got}")]
    HistoryTooShort { got: u32, min: u32 },
}

impl AppConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        let min = ANALYSIS_WINDOW as u32;
        if self.history_days < min {
            return Err(ConfigError::HistoryTooShort {
                got: self.history_days,
                min,
            });
        }
        Ok(self)
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()
}

/// Loads the config file; a missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, using defaults", path);
            Ok(AppConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}
