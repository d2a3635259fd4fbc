//! Search service: input guard, scan and results export.

use std::path::Path;
use std::time::Instant;

use crate::core::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::error::Result;
use crate::core::search::scan;
use crate::core::storage::ResultsWriter;
use crate::core::types::{Index, SearchOutcome, SearchQuery};

/// Runs queries against an index and exports the matches
#[derive(Debug, Clone)]
pub struct Searcher {
    results: ResultsWriter,
}

impl Searcher {
    pub fn new(results: ResultsWriter) -> Self {
        Self { results }
    }

    /// Where the last search's paths are written
    pub fn results_path(&self) -> &Path {
        self.results.path()
    }

    /// Run `query` against `index`
    ///
    /// An empty term is rejected softly: nothing is scanned, the results
    /// file is left as it was, the sink is told, and an empty outcome with
    /// zero counters comes back. Otherwise the matches overwrite the
    /// results file.
    pub fn search(
        &self,
        index: &Index,
        query: &SearchQuery,
        sink: &dyn DiagnosticSink,
    ) -> Result<SearchOutcome> {
        if query.term.is_empty() {
            sink.emit(&Diagnostic::EmptySearchTerm);
            return Ok(SearchOutcome::default());
        }

        let start = Instant::now();
        let outcome = scan(index, query);

        tracing::debug!(
            "Search '{}' ({}) matched {} of {} records in {}ms",
            query.term,
            query.mode,
            outcome.matches,
            outcome.records,
            start.elapsed().as_millis()
        );

        self.results.write(&outcome.paths)?;
        Ok(outcome)
    }
}
