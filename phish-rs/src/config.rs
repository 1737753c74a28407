//! Configuration loaded from TOML

use crate::error::{PhishError, Result};
use crate::spam::DEFAULT_SENDER;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    /// JSON corpus file; the built-in demo corpus is used when unset
    pub corpus_path: Option<String>,
    /// Sender substituted for training records without one
    #[serde(default = "default_sender")]
    pub default_sender: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_spam_label")]
    pub spam_label: String,
    #[serde(default = "default_ham_label")]
    pub ham_label: String,
    #[serde(default = "default_prompt")]
    pub missing_input_prompt: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String, // pretty, compact or json
}

fn default_sender() -> String {
    DEFAULT_SENDER.to_string()
}

fn default_spam_label() -> String {
    "phishing".to_string()
}

fn default_ham_label() -> String {
    "safe".to_string()
}

fn default_prompt() -> String {
    "Please fill in both fields!".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            default_sender: default_sender(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            spam_label: default_spam_label(),
            ham_label: default_ham_label(),
            missing_input_prompt: default_prompt(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PhishError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| PhishError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.training.default_sender.trim().is_empty() {
            return Err(PhishError::Config("default_sender cannot be empty".to_string()));
        }

        if self.display.spam_label.is_empty() || self.display.ham_label.is_empty() {
            return Err(PhishError::Config("display labels cannot be empty".to_string()));
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => Ok(()),
            other => Err(PhishError::Config(format!("Unknown log format: {}", other))),
        }
    }
}
