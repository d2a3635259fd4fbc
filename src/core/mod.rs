//! Core domain logic (adapter-agnostic)
//!
//! This module contains the indexing and search logic, independent of
//! how a host presents it.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **diagnostics**: Status events and the sink trait hosts implement
//! - **error**: Error types and Result alias
//! - **types**: Index, query and outcome data structures
//! - **xdg**: XDG directory handling
//! - **storage**: Index file and results file persistence
//! - **indexer**: Directory walking and index building
//! - **search**: Predicate scan and results export
//! - **services**: Context object tying the above together

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{FiledexError, Result};
pub use services::Services;
