//! Index building.
//!
//! Coordinates a re-index:
//! 1. Walk the directory tree
//! 2. Stamp the listing with its root and build time
//! 3. Persist it, replacing the previous index

use std::path::Path;
use std::time::Instant;

use crate::core::config::IndexingConfig;
use crate::core::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::error::Result;
use crate::core::indexer::DirectoryWalker;
use crate::core::storage::IndexStore;
use crate::core::types::Index;

/// Builds and persists indexes
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    walker: DirectoryWalker,
}

impl Indexer {
    /// Create an indexer
    ///
    /// # Arguments
    ///
    /// * `exclude_patterns` - Glob patterns pruned from the walk
    /// * `follow_links` - Whether symbolic links are followed
    pub fn new(exclude_patterns: Vec<String>, follow_links: bool) -> Result<Self> {
        Ok(Self {
            walker: DirectoryWalker::new(exclude_patterns, follow_links)?,
        })
    }

    pub fn from_config(config: &IndexingConfig) -> Result<Self> {
        Self::new(config.exclude_patterns.clone(), config.follow_links)
    }

    /// Walk `root` into an index without persisting it
    ///
    /// `root` is not validated: a missing or unreadable root simply gives
    /// an empty index.
    pub fn scan(&self, root: &Path) -> Index {
        let entries = self.walker.walk(root);
        Index::new(root.to_string_lossy(), entries)
    }

    /// Walk `root`, persist the result and return it
    pub fn build(
        &self,
        root: &Path,
        store: &IndexStore,
        sink: &dyn DiagnosticSink,
    ) -> Result<Index> {
        let start = Instant::now();

        sink.emit(&Diagnostic::IndexStarted {
            root: root.display().to_string(),
        });
        tracing::info!("Starting directory walk from {:?}", root);

        let index = self.scan(root);
        store.save(&index)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Indexing complete: {} files in {} directories in {}ms",
            index.file_count(),
            index.directory_count(),
            duration_ms
        );

        sink.emit(&Diagnostic::IndexCreated {
            directories: index.directory_count(),
            files: index.file_count(),
        });

        Ok(index)
    }
}
