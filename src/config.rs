//! Configuration management for Re:Me
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, RemeError};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Re:Me
///
/// Holds everything the pipeline needs: the completion provider settings,
/// journal behavior, and storage location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Journal behavior configuration
    #[serde(default)]
    pub journal: JournalConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API base URL for the chat completions endpoint
    ///
    /// Overridable so tests can point the provider at a mock server.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds; a timeout is a reportable provider failure
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Journal behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Weekday on which the automatic weekly report fires
    #[serde(default = "default_report_day")]
    pub report_day: String,

    /// How many recent entries feed the memorial persona
    #[serde(default = "default_memorial_history_limit")]
    pub memorial_history_limit: usize,
}

fn default_report_day() -> String {
    "sunday".to_string()
}

fn default_memorial_history_limit() -> usize {
    50
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            report_day: default_report_day(),
            memorial_history_limit: default_memorial_history_limit(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Optional database path override; defaults to the user data directory
    #[serde(default)]
    pub db_path: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file with CLI overrides applied
    ///
    /// Falls back to defaults when the file does not exist.
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RemeError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| RemeError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(api_base) = std::env::var("REME_API_BASE") {
            self.provider.api_base = api_base;
        }
        if let Ok(model) = std::env::var("REME_MODEL") {
            self.provider.model = model;
        }
        if let Ok(report_day) = std::env::var("REME_REPORT_DAY") {
            self.journal.report_day = report_day;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(db_path) = &cli.storage_path {
            self.storage.db_path = Some(db_path.clone());
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_base.is_empty() {
            return Err(RemeError::Config("provider.api_base must not be empty".into()).into());
        }
        if self.provider.model.is_empty() {
            return Err(RemeError::Config("provider.model must not be empty".into()).into());
        }
        if self.provider.timeout_seconds == 0 {
            return Err(
                RemeError::Config("provider.timeout_seconds must be positive".into()).into(),
            );
        }
        if self.journal.memorial_history_limit == 0 {
            return Err(RemeError::Config(
                "journal.memorial_history_limit must be positive".into(),
            )
            .into());
        }
        self.journal.report_weekday()?;
        Ok(())
    }
}

impl JournalConfig {
    /// Parse the configured report day into a weekday
    ///
    /// Accepts full names and common abbreviations, case-insensitive.
    pub fn report_weekday(&self) -> Result<Weekday> {
        match self.report_day.to_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Mon),
            "tuesday" | "tue" => Ok(Weekday::Tue),
            "wednesday" | "wed" => Ok(Weekday::Wed),
            "thursday" | "thu" => Ok(Weekday::Thu),
            "friday" | "fri" => Ok(Weekday::Fri),
            "saturday" | "sat" => Ok(Weekday::Sat),
            "sunday" | "sun" => Ok(Weekday::Sun),
            other => Err(RemeError::Config(format!(
                "journal.report_day '{}' is not a weekday",
                other
            ))
            .into()),
        }
    }
}
