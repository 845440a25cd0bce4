//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// EDGAR endpoints and fetch behavior settings
    #[serde(default)]
    pub edgar: EdgarConfig,

    /// Document store settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.edgar.user_agent.trim().is_empty() {
            return Err(AppError::validation("edgar.user_agent is empty"));
        }
        // SEC access policy requires a contact address in the client identity
        if !self.edgar.user_agent.contains("mailto:") {
            return Err(AppError::validation(
                "edgar.user_agent must carry a mailto: contact address",
            ));
        }
        if self.edgar.timeout_secs == 0 {
            return Err(AppError::validation("edgar.timeout_secs must be > 0"));
        }
        if self.edgar.download_timeout_secs == 0 {
            return Err(AppError::validation(
                "edgar.download_timeout_secs must be > 0",
            ));
        }
        if self.edgar.target_forms.is_empty() {
            return Err(AppError::validation("No target forms defined"));
        }
        if self.storage.data_dir.trim().is_empty() {
            return Err(AppError::validation("storage.data_dir is empty"));
        }
        Ok(())
    }
}

/// EDGAR endpoints and fetch behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgarConfig {
    /// Root URL of the daily index archive
    #[serde(default = "defaults::daily_index_url")]
    pub daily_index_url: String,

    /// Root URL prefixed to index filename fields to form filing text URLs
    #[serde(default = "defaults::archive_url")]
    pub archive_url: String,

    /// User-Agent header for HTTP requests (must carry a contact address)
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Form types accepted by the index parser
    #[serde(default = "defaults::target_forms")]
    pub target_forms: Vec<String>,

    /// Per-request timeout in seconds for filing text fetches
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Cap on the archive download in seconds
    #[serde(default = "defaults::download_timeout")]
    pub download_timeout_secs: u64,
}

impl EdgarConfig {
    /// Accepted form types as a set for membership checks.
    pub fn form_set(&self) -> HashSet<String> {
        self.target_forms.iter().cloned().collect()
    }
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            daily_index_url: defaults::daily_index_url(),
            archive_url: defaults::archive_url(),
            user_agent: defaults::user_agent(),
            target_forms: defaults::target_forms(),
            timeout_secs: defaults::timeout(),
            download_timeout_secs: defaults::download_timeout(),
        }
    }
}

/// Document store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON document per accession
    #[serde(default = "defaults::data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level emitted: debug, info, warn, error
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // EDGAR defaults
    pub fn daily_index_url() -> String {
        "https://www.sec.gov/Archives/edgar/daily-index".into()
    }
    pub fn archive_url() -> String {
        "https://www.sec.gov/Archives".into()
    }
    pub fn user_agent() -> String {
        "edgar-ingest/0.1 (mailto:ingest-ops@example.com)".into()
    }
    pub fn target_forms() -> Vec<String> {
        ["10-K", "10-Q", "13F", "13D", "4"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn download_timeout() -> u64 {
        300
    }

    // Storage defaults
    pub fn data_dir() -> String {
        "data/filings".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.edgar.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_user_agent_without_contact() {
        let mut config = Config::default();
        config.edgar.user_agent = "edgar-ingest/0.1".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeouts() {
        let mut config = Config::default();
        config.edgar.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.edgar.download_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_form_set() {
        let mut config = Config::default();
        config.edgar.target_forms.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_form_set_contains_annual_report() {
        let config = Config::default();
        assert!(config.edgar.form_set().contains("10-K"));
        assert_eq!(config.edgar.form_set().len(), 5);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [edgar]
            target_forms = ["8-K"]

            [storage]
            data_dir = "/var/lib/edgar"
            "#,
        )
        .unwrap();

        assert_eq!(config.edgar.target_forms, vec!["8-K"]);
        assert_eq!(config.storage.data_dir, "/var/lib/edgar");
        // Unspecified fields fall back to defaults
        assert_eq!(config.edgar.timeout_secs, 15);
        assert!(config.edgar.daily_index_url.contains("daily-index"));
    }
}
