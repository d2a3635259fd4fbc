//! Filename search over a loaded index.
//!
//! A search is a single linear pass: every filename of every entry is
//! tested against one predicate (contains, starts-with or ends-with) and
//! the matches are reported as forward-slash paths in index order.

mod matcher;
mod searcher;

pub use matcher::{normalize_path, scan};
pub use searcher::Searcher;
