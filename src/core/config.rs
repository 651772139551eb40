//! Application configuration management
//!
//! Handles loading the optional settings file:
//! - Inter-request delay for the deleter
//! - Page size for issue listing
//! - Which response decoder resolves issue node ids

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Result, SweepError};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "GHSWEEP_CONFIG";

/// Largest page GitHub's REST API will return
pub const MAX_PAGE_SIZE: u8 = 100;

/// Available decoders for GraphQL lookup payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DecoderKind {
    /// Full JSON parser (default)
    #[default]
    Json,
    /// Narrow extractor for the one field the deleter needs
    FieldExtractor,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Pause after each processed issue, in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Issues requested per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Decoder used to pull node ids out of lookup responses
    #[serde(default)]
    pub decoder: DecoderKind,
}

fn default_request_delay_ms() -> u64 {
    500
}

fn default_page_size() -> u8 {
    MAX_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay_ms(),
            page_size: default_page_size(),
            decoder: DecoderKind::default(),
        }
    }
}

impl Config {
    /// Load configuration from `GHSWEEP_CONFIG` or the default location
    ///
    /// A missing file at the default location yields the defaults. A path given
    /// through the environment must exist.
    pub fn load() -> Result<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
            if !explicit.is_empty() {
                let path = PathBuf::from(explicit);
                if !path.exists() {
                    return Err(SweepError::Config(format!(
                        "{} points to '{}', which does not exist",
                        CONFIG_PATH_ENV,
                        path.display()
                    )));
                }
                return Self::load_from(&path);
            }
        }

        match Self::config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SweepError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config.normalized())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "ghsweep", "ghsweep")
            .ok_or_else(|| SweepError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Delay inserted after each processed issue
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}
