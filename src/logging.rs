//! Logging setup for the `gita` binary
//!
//! Supports three output formats on stderr:
//! - `text`: plain, for piping (default)
//! - `json`: one JSON object per line
//! - `pretty`: multi-line with source locations
//!
//! `GITA_LOG_FORMAT` and `GITA_LOG_LEVEL` override the config file, and
//! `RUST_LOG` overrides both for the filter. `-v` wins over all of them.

use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format
pub const FORMAT_ENV: &str = "GITA_LOG_FORMAT";

/// Environment variable selecting the level
pub const LEVEL_ENV: &str = "GITA_LOG_LEVEL";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// Machine-parseable JSON
    Json,
    /// Pretty-printed for development
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!("Invalid log format: '{}'. Valid options: text, json, pretty", s)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Force `debug`, even over `RUST_LOG`
    pub verbose: bool,
}

impl LoggingConfig {
    /// Create a logging configuration
    pub fn new(format: LogFormat, level: impl Into<String>, verbose: bool) -> Self {
        Self { format, level: level.into(), verbose }
    }

    /// Combine file settings with the `GITA_LOG_*` overrides
    ///
    /// An unparseable format from either place falls back to text.
    pub fn resolve(file: &crate::config::LoggingSection, verbose: bool) -> Self {
        Self::resolve_with(file, verbose, |name| std::env::var(name).ok())
    }

    fn resolve_with<F>(file: &crate::config::LoggingSection, verbose: bool, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = env(FORMAT_ENV)
            .unwrap_or_else(|| file.format.clone())
            .parse()
            .unwrap_or_default();
        let level = env(LEVEL_ENV).unwrap_or_else(|| file.level.clone());

        Self::new(format, level, verbose)
    }

    /// Filter directive given the current `RUST_LOG` value
    fn directive(&self, rust_log: Option<String>) -> String {
        if self.verbose {
            return "debug".to_string();
        }
        rust_log
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.level.clone())
    }

    fn filter(&self) -> EnvFilter {
        let directive = self.directive(std::env::var(EnvFilter::DEFAULT_ENV).ok());
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global subscriber; later calls are ignored
    pub fn init(&self) {
        let filter = self.filter();

        let installed = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_current_span(true)
                .flatten_event(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init(),
        };

        if installed.is_err() {
            tracing::debug!("logging already initialized");
        }
    }
}
