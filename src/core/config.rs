//! Configuration management for filedex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{FiledexError, Result};
use crate::core::types::SearchMode;
use crate::core::xdg::{XdgDirs, INDEX_FILE_NAME, RESULTS_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Root walked when `index` is run without a path
    #[serde(default = "default_root")]
    pub default_root: PathBuf,

    /// Glob patterns pruned from the walk (empty = list everything)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_links: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the index file and the results file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Mode used when a search doesn't name one
    #[serde(default)]
    pub default_mode: SearchMode,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            default_root: default_root(),
            exclude_patterns: Vec::new(),
            follow_links: false,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| FiledexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. FILEDEX_CONFIG env var
    /// 2. XDG config file (~/.config/filedex/config.toml)
    /// 3. Project-local ./filedex.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("FILEDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("filedex.toml").exists() {
                Self::from_file("filedex.toml")?
            } else {
                Self::default()
            }
        };

        // Data files go to the XDG data directory unless placed explicitly
        if env::var("FILEDEX_DATA_DIR").is_err() && config.storage.data_dir == default_data_dir()
        {
            config.storage.data_dir = xdg.data_dir.clone();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("FILEDEX_DEFAULT_ROOT") {
            self.indexing.default_root = PathBuf::from(root);
        }
        if let Ok(excludes) = env::var("FILEDEX_EXCLUDE") {
            self.indexing.exclude_patterns = excludes
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(follow) = env::var("FILEDEX_FOLLOW_LINKS") {
            if let Ok(f) = follow.parse() {
                self.indexing.follow_links = f;
            }
        }

        if let Ok(data_dir) = env::var("FILEDEX_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(mode) = env::var("FILEDEX_SEARCH_MODE") {
            match mode.parse() {
                Ok(m) => self.search.default_mode = m,
                Err(e) => tracing::warn!("Ignoring FILEDEX_SEARCH_MODE: {}", e),
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.default_root.as_os_str().is_empty() {
            return Err(FiledexError::ConfigError(
                "Default root must not be empty".to_string(),
            ));
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(FiledexError::ConfigError(
                "Data directory must not be empty".to_string(),
            ));
        }

        for pattern in &self.indexing.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| FiledexError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// Location of the persisted index
    pub fn index_path(&self) -> PathBuf {
        self.storage.data_dir.join(INDEX_FILE_NAME)
    }

    /// Location of the exported search results
    pub fn results_path(&self) -> PathBuf {
        self.storage.data_dir.join(RESULTS_FILE_NAME)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Default root: {:?}", self.indexing.default_root);
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!("  Follow links: {}", self.indexing.follow_links);
        tracing::info!("  Data dir: {:?}", self.storage.data_dir);
        tracing::info!("  Default mode: {}", self.search.default_mode);
    }
}
