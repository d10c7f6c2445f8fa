//! Configuration management
//!
//! Settings live in a TOML file at `$GITA_CONFIG`, or
//! `<config_dir>/gita-reader/config.toml` when that is unset. A missing file
//! is not an error: every section has defaults. The API key is never read
//! from here; see [`crate::credentials`].

use gita_client::api::{ApiConfig, DEFAULT_API_HOST, DEFAULT_BASE_URL};
use gita_client::types::DEFAULT_LANGUAGE;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "GITA_CONFIG";

/// Directory name under the platform config and data directories
pub const APP_DIR: &str = "gita-reader";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Platform directory could not be determined
    #[error("Could not determine {0}")]
    MissingDirectory(&'static str),

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote API settings
    pub api: ApiSection,
    /// Local preference storage
    pub storage: StorageSection,
    /// What the views show
    pub display: DisplaySection,
    /// Log output
    pub logging: LoggingSection,
}

/// `[api]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Service base URL
    pub base_url: String,
    /// `X-RapidAPI-Host` value
    pub host: String,
    /// Request timeout in seconds; unset waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_API_HOST.to_string(),
            timeout_secs: None,
        }
    }
}

/// `[storage]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Preference database directory; defaults under the platform data dir
    pub path: Option<PathBuf>,
}

/// `[display]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Translation language shown on the home and verse pages
    pub language: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self { language: DEFAULT_LANGUAGE.to_string() }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Minimum level or filter directive
    pub level: String,
    /// `text`, `json` or `pretty`
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: "text".to_string() }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path(&resolve_config_path()?)
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot work
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".to_string()));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.host.trim().is_empty() {
            return Err(ConfigError::Invalid("api.host must not be empty".to_string()));
        }
        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid("api.timeout_secs must be positive".to_string()));
        }
        if self.display.language.trim().is_empty() {
            return Err(ConfigError::Invalid("display.language must not be empty".to_string()));
        }
        Ok(())
    }

    /// Client configuration for the given key
    pub fn api_config(&self, api_key: SecretString) -> ApiConfig {
        let config = ApiConfig::new(api_key)
            .with_base_url(self.api.base_url.as_str())
            .with_host(self.api.host.as_str());

        match self.api.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Preference database directory
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => Ok(resolve_data_path()?.join("prefs")),
        }
    }
}

/// Config file location: `$GITA_CONFIG`, else the platform config dir
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let config_dir = dirs::config_dir().ok_or(ConfigError::MissingDirectory("config directory"))?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Data directory for local state
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::MissingDirectory("data directory"))?;
    Ok(data_dir.join(APP_DIR))
}
