//! Service container for filedex
//!
//! Owns the configuration, the persisted-state handles, the diagnostic sink
//! and the index currently in memory. Adapters build one `Services` and
//! route index/search requests through it.

use crate::core::config::Config;
use crate::core::diagnostics::{DiagnosticSink, TracingSink};
use crate::core::error::Result;
use crate::core::indexer::Indexer;
use crate::core::search::Searcher;
use crate::core::storage::{IndexStore, ResultsWriter};
use crate::core::types::{Index, SearchOutcome, SearchQuery};
use std::path::Path;

/// Services container
pub struct Services {
    /// Application configuration
    pub config: Config,

    /// Persisted index file
    pub store: IndexStore,

    /// Query runner and results exporter
    pub searcher: Searcher,

    sink: Box<dyn DiagnosticSink>,
    index: Index,
}

impl Services {
    /// Create services reporting diagnostics through `tracing`
    ///
    /// Loads the persisted index; a missing or corrupt one leaves the
    /// services with an empty index.
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Box::new(TracingSink))
    }

    /// Create services reporting diagnostics to `sink`
    pub fn with_sink(config: Config, sink: Box<dyn DiagnosticSink>) -> Self {
        let store = IndexStore::new(config.index_path());
        let searcher = Searcher::new(ResultsWriter::new(config.results_path()));
        let index = store.load(sink.as_ref());

        Self {
            config,
            store,
            searcher,
            sink,
            index,
        }
    }

    /// The index searches currently run against
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Re-read the index from storage
    pub fn reload_index(&mut self) -> &Index {
        self.index = self.store.load(self.sink.as_ref());
        &self.index
    }

    /// Build a fresh index of `root` with the configured walker settings
    pub fn rebuild_index(&mut self, root: &Path) -> Result<&Index> {
        let indexer = Indexer::from_config(&self.config.indexing)?;
        self.rebuild_index_with(&indexer, root)
    }

    /// Build a fresh index of `root` with a caller-supplied indexer
    ///
    /// The new index replaces the persisted one and the one in memory.
    pub fn rebuild_index_with(&mut self, indexer: &Indexer, root: &Path) -> Result<&Index> {
        self.index = indexer.build(root, &self.store, self.sink.as_ref())?;
        Ok(&self.index)
    }

    /// Run `query` against the in-memory index
    pub fn search(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        self.searcher
            .search(&self.index, query, self.sink.as_ref())
    }
}
