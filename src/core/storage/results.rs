//! Exported search results file.

use crate::core::error::Result;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the last search's paths as UTF-8 text, one per line
#[derive(Debug, Clone)]
pub struct ResultsWriter {
    path: PathBuf,
}

impl ResultsWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the results file with `paths`
    ///
    /// Every line is newline-terminated, including the last. An empty
    /// result leaves an empty file.
    pub fn write(&self, paths: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        for path in paths {
            writer.write_all(path.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} results to {:?}", paths.len(), self.path);
        Ok(())
    }

    /// Read back the last exported results
    pub fn read(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(String::from).collect())
    }
}
