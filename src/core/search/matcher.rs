//! Filename predicates applied over an index.

use crate::core::types::{Index, SearchOutcome, SearchQuery};

/// Join a directory and a filename into a forward-slash path
///
/// Backslashes in the directory become forward slashes and the two parts
/// are joined by exactly one slash.
pub fn normalize_path(directory: &str, filename: &str) -> String {
    let dir = directory.replace('\\', "/");
    let dir = dir.trim_end_matches('/');
    let mut path = String::with_capacity(dir.len() + 1 + filename.len());
    path.push_str(dir);
    path.push('/');
    path.push_str(filename);
    path
}

/// Test every filename in `index` against `query`
///
/// `records` counts every filename visited, `matches` the ones the
/// predicate accepted. The empty-term guard lives in [`Searcher`]; here an
/// empty term is an ordinary (always matching) term.
///
/// [`Searcher`]: crate::core::search::Searcher
pub fn scan(index: &Index, query: &SearchQuery) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();

    for entry in &index.entries {
        for filename in &entry.filenames {
            outcome.records += 1;
            if query.mode.matches(filename, &query.term) {
                outcome.matches += 1;
                outcome
                    .paths
                    .push(normalize_path(&entry.directory_path, filename));
            }
        }
    }

    outcome
}
