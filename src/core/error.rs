//! Error types for filedex.
//!
//! Most failure modes of indexing and searching are recovered in place
//! (missing index, empty search term, unreadable directories). What remains
//! here are the failures a host still has to see: bad configuration and
//! failed writes of the index or results file.

use thiserror::Error;

/// Result type alias for filedex operations
pub type Result<T> = std::result::Result<T, FiledexError>;

/// Main error type for filedex
#[derive(Error, Debug)]
pub enum FiledexError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl FiledexError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error came from user-supplied configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            FiledexError::ConfigError(_)
                | FiledexError::InvalidPattern { .. }
                | FiledexError::TomlError(_)
        )
    }
}
