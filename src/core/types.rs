//! Core data types for filedex.
//!
//! Defines the index (directory listing snapshot), search queries and
//! search outcomes shared by the indexer, the searcher and the adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One directory and the names of its direct file children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Directory path in the host separator convention
    pub directory_path: String,

    /// File (non-directory) names in enumeration order; never empty
    pub filenames: Vec<String>,
}

impl IndexEntry {
    pub fn new(directory_path: impl Into<String>, filenames: Vec<String>) -> Self {
        Self {
            directory_path: directory_path.into(),
            filenames,
        }
    }
}

/// Snapshot of a directory tree's file listing
///
/// Entries are kept in walk order (a directory before its subdirectories).
/// Directories without files never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Root path the index was built from
    #[serde(default)]
    pub root: Option<String>,

    /// When the index was built
    #[serde(default)]
    pub built_at: Option<DateTime<Utc>>,

    /// Indexed directories
    pub entries: Vec<IndexEntry>,
}

impl Index {
    /// Create an index stamped with its root and the current time
    pub fn new(root: impl Into<String>, entries: Vec<IndexEntry>) -> Self {
        Self {
            root: Some(root.into()),
            built_at: Some(Utc::now()),
            entries,
        }
    }

    /// An index that holds nothing (no prior build)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
        Self {
            root: None,
            built_at: None,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of indexed directories
    pub fn directory_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of filenames across all entries
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.filenames.len()).sum()
    }
}

/// String-match rule applied to each filename
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Filename contains the term
    #[default]
    Contains,
    /// Filename starts with the term
    StartsWith,
    /// Filename ends with the term
    EndsWith,
}

impl SearchMode {
    /// Evaluate this mode's predicate (case-sensitive)
    pub fn matches(self, filename: &str, term: &str) -> bool {
        match self {
            SearchMode::Contains => filename.contains(term),
            SearchMode::StartsWith => filename.starts_with(term),
            SearchMode::EndsWith => filename.ends_with(term),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Contains => "contains",
            SearchMode::StartsWith => "starts-with",
            SearchMode::EndsWith => "ends-with",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "contains" => Ok(SearchMode::Contains),
            "starts-with" | "startswith" => Ok(SearchMode::StartsWith),
            "ends-with" | "endswith" => Ok(SearchMode::EndsWith),
            other => Err(format!(
                "unknown search mode '{other}' (expected contains, starts-with or ends-with)"
            )),
        }
    }
}

/// A filename search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub mode: SearchMode,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            term: term.into(),
            mode,
        }
    }

    pub fn contains(term: impl Into<String>) -> Self {
        Self::new(term, SearchMode::Contains)
    }

    pub fn starts_with(term: impl Into<String>) -> Self {
        Self::new(term, SearchMode::StartsWith)
    }

    pub fn ends_with(term: impl Into<String>) -> Self {
        Self::new(term, SearchMode::EndsWith)
    }
}

/// Result of one search: matching paths plus counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Normalized full paths, in index scan order
    pub paths: Vec<String>,

    /// Filenames that satisfied the predicate
    pub matches: usize,

    /// Filenames scanned
    pub records: usize,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
