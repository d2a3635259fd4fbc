//! Persisted index file.

use crate::core::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::error::Result;
use crate::core::types::Index;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Reads and writes the index file
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the index, falling back to an empty one
    ///
    /// A missing file means no index has been built yet; an unreadable or
    /// undecodable file is discarded. Either way the caller gets an empty
    /// index and the sink hears why.
    pub fn load(&self, sink: &dyn DiagnosticSink) -> Index {
        if !self.path.exists() {
            sink.emit(&Diagnostic::IndexMissing {
                path: self.path.clone(),
            });
            return Index::empty();
        }

        match self.read() {
            Ok(index) => {
                tracing::debug!(
                    "Loaded index from {:?}: {} directories, {} files",
                    self.path,
                    index.directory_count(),
                    index.file_count()
                );
                index
            }
            Err(e) => {
                sink.emit(&Diagnostic::IndexUnreadable {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
                Index::empty()
            }
        }
    }

    /// Read the index, reporting any failure
    pub fn read(&self) -> Result<Index> {
        let contents = fs::read(&self.path)?;
        let index: Index = serde_json::from_slice(&contents)?;
        Ok(index)
    }

    /// Replace the index file with `index`
    pub fn save(&self, index: &Index) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, index)?;
        writer.flush()?;

        tracing::debug!(
            "Saved index to {:?} ({} directories)",
            self.path,
            index.directory_count()
        );
        Ok(())
    }
}
