//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::export::DEFAULT_EXPORT_FILE;

/// Name of the storage file inside the data directory
pub const STORAGE_FILE: &str = "storage.json";

/// Portfolio configuration with layered hierarchy
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Storage file holding the collection and preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// File name used by `export` when no output is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_file: Option<String>,
}

/// Errors reading an explicitly requested config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        // 1. Built-in defaults (already in Default impl)
        let mut config = Config::default();

        // 2. User config (~/.config/portfolio/config.yaml)
        if let Some(path) = Self::global_config_path() {
            if let Ok(file) = Self::from_file(&path) {
                config.merge(file);
            }
        }

        // 3. Environment variables
        config.merge(Self::from_env());

        config
    }

    /// Parse a single config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Values set through `PORTFOLIO_*` environment variables
    pub fn from_env() -> Self {
        Config {
            store: std::env::var_os("PORTFOLIO_STORE").map(PathBuf::from),
            default_format: std::env::var("PORTFOLIO_FORMAT").ok(),
            export_file: None,
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "portfolio")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Default storage location in the platform data directory
    pub fn default_store_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "portfolio")
            .map(|dirs| dirs.data_dir().join(STORAGE_FILE))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.store.is_some() {
            self.store = other.store;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.export_file.is_some() {
            self.export_file = other.export_file;
        }
    }

    /// Resolve the storage file, falling back to the working directory
    pub fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .or_else(Self::default_store_path)
            .unwrap_or_else(|| PathBuf::from(STORAGE_FILE))
    }

    /// Get the export file name
    pub fn export_file(&self) -> String {
        self.export_file
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPORT_FILE.to_string())
    }
}
