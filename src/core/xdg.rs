//! XDG Base Directory support
//!
//! Resolves where filedex keeps its configuration file and its data files
//! (the persisted index and the exported search results).

use std::env;
use std::fs;
use std::path::PathBuf;

/// File name of the persisted index inside the data directory
pub const INDEX_FILE_NAME: &str = "file_index.json";

/// File name of the exported search results inside the data directory
pub const RESULTS_FILE_NAME: &str = "search_results.txt";

/// XDG directory structure for filedex
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit FILEDEX_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG defaults (~/.config, ~/.local/share)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            data_dir: Self::resolve_data_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("FILEDEX_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("filedex");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("filedex")
    }

    fn resolve_data_dir() -> PathBuf {
        if let Ok(dir) = env::var("FILEDEX_DATA_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("filedex");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("filedex")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        if let Ok(file) = env::var("FILEDEX_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Get persisted index path
    pub fn index_file(&self) -> PathBuf {
        self.data_dir.join(INDEX_FILE_NAME)
    }

    /// Get search results export path
    pub fn results_file(&self) -> PathBuf {
        self.data_dir.join(RESULTS_FILE_NAME)
    }

    /// Create the data directory if it doesn't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Data: {:?}", self.data_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
