use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ContrastAgent;

/// Application-level constants
pub const APP_NAME: &str = "RadioAssist";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of reformulations kept in the history log.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the application data directory
/// ~/RadioAssist/ when a home directory is known, ./RadioAssist otherwise.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the history log file
pub fn history_path() -> PathBuf {
    app_data_dir().join("history.json")
}

/// Get the TOML configuration file (platform config dir).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("radioassist").join("config.toml"))
}

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "radioassist_lib=info"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine configuration directory")]
    NoConfigDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User-tunable settings, read from `config.toml`.
///
/// Every field has a serde default so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Contrast agent selected when a session starts.
    #[serde(default = "default_contrast_agent")]
    pub default_contrast_agent: ContrastAgent,

    /// Maximum number of history entries kept (newest first).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// tracing EnvFilter directive.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
}

fn default_contrast_agent() -> ContrastAgent {
    ContrastAgent::Xenetix
}
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
fn default_log_filter_string() -> String {
    default_log_filter().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_contrast_agent: default_contrast_agent(),
            history_limit: default_history_limit(),
            log_filter: default_log_filter_string(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document. Unknown keys are ignored.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from the platform config file, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Configuration loaded");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid configuration, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty TOML, creating the parent directory.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(path)
    }
}

/// Process-wide configuration, loaded once.
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_ends_with_app_name() {
        assert!(app_data_dir().ends_with("RadioAssist"));
    }

    #[test]
    fn history_path_under_app_data() {
        let history = history_path();
        assert!(history.starts_with(app_data_dir()));
        assert!(history.ends_with("history.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.default_contrast_agent, ContrastAgent::Xenetix);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            "default_contrast_agent = \"iomeron\"\nhistory_limit = 25\n",
        )
        .unwrap();
        assert_eq!(config.default_contrast_agent, ContrastAgent::Iomeron);
        assert_eq!(config.history_limit, 25);
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn unknown_contrast_agent_is_rejected() {
        assert!(AppConfig::from_toml("default_contrast_agent = \"omnipaque\"").is_err());
    }

    #[test]
    fn config_roundtrips_through_pretty_toml() {
        let config = AppConfig {
            default_contrast_agent: ContrastAgent::Iomeron,
            history_limit: 3,
            log_filter: "debug".into(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
