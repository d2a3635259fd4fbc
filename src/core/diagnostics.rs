//! Human-readable status lines emitted by the core.
//!
//! Indexing and searching report progress and recovered failures as
//! [`Diagnostic`] events. The host decides how to show them by supplying a
//! [`DiagnosticSink`]; the default sink forwards them to `tracing`.

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

/// Status event raised by the indexer or the searcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A re-index is about to walk `root`
    IndexStarted { root: String },

    /// A new index was built and persisted
    IndexCreated { directories: usize, files: usize },

    /// No index file exists yet
    IndexMissing { path: PathBuf },

    /// The index file exists but could not be read or decoded
    IndexUnreadable { path: PathBuf, reason: String },

    /// Search requested with an empty term
    EmptySearchTerm,
}

impl Diagnostic {
    /// Whether this event reports a recovered failure
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Diagnostic::IndexUnreadable { .. } | Diagnostic::EmptySearchTerm
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IndexStarted { root } => {
                write!(f, "Please wait while index is being created for {root}...")
            }
            Diagnostic::IndexCreated { directories, files } => write!(
                f,
                "New index has been created ({files} files in {directories} directories)."
            ),
            Diagnostic::IndexMissing { path } => write!(
                f,
                "No prior index at {}, starting empty.",
                path.display()
            ),
            Diagnostic::IndexUnreadable { path, reason } => write!(
                f,
                "Index at {} could not be read ({reason}), starting empty.",
                path.display()
            ),
            Diagnostic::EmptySearchTerm => f.write_str("Please enter search term."),
        }
    }
}

/// Receiver of core status lines
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if diagnostic.is_warning() {
            tracing::warn!("{}", diagnostic);
        } else {
            tracing::info!("{}", diagnostic);
        }
    }
}

/// Keeps every diagnostic in memory
///
/// Clones share the same buffer, so a caller can hand one clone to the core
/// and inspect the other afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<Diagnostic>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }

    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.events.borrow().iter().any(|d| d == diagnostic)
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.events.borrow_mut().push(diagnostic.clone());
    }
}
