//! filedex - cached directory listings with filename search
//!
//! Builds a snapshot of a directory tree's file listing once, then answers
//! contains / starts-with / ends-with filename queries against it without
//! touching the filesystem again.
//!
//! # Architecture
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types, xdg, diagnostics
//!   - indexer (directory walking, index building)
//!   - search (predicate scan, results export)
//!   - storage (index file, results file)
//!   - services (context object)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```no_run
//! use filedex::{Config, SearchQuery, Services};
//! use std::path::Path;
//!
//! let mut services = Services::new(Config::load()?);
//! services.rebuild_index(Path::new("/srv/share"))?;
//!
//! let outcome = services.search(&SearchQuery::contains("report"))?;
//! for path in &outcome.paths {
//!     println!("{path}");
//! }
//! # Ok::<(), filedex::FiledexError>(())
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use crate::core::error::{FiledexError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
