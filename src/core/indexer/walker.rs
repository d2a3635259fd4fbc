//! File system walker producing per-directory file listings.
//!
//! Traverses a directory tree top-down and groups the file entries under
//! the directory that holds them. Handles errors gracefully (permission
//! denied, dangling links, missing root) without crashing.

use glob::Pattern;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{FiledexError, Result};
use crate::core::types::IndexEntry;

/// Directory walker with optional exclude patterns
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    /// Patterns pruned from the walk (e.g., "**/.git/**", "*.tmp")
    exclude_patterns: Vec<Pattern>,

    /// Follow symbolic links
    follow_links: bool,
}

impl DirectoryWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `exclude_patterns` - Glob patterns for directories and files to skip
    /// * `follow_links` - Whether symbolic links are followed
    ///
    /// # Returns
    ///
    /// A new `DirectoryWalker` or an error if a pattern is invalid
    pub fn new(exclude_patterns: Vec<String>, follow_links: bool) -> Result<Self> {
        let exclude = exclude_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| FiledexError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            exclude_patterns: exclude,
            follow_links,
        })
    }

    /// List every directory under `root` that holds at least one file
    ///
    /// Directories come out in pre-order (a directory before its
    /// subdirectories); file names keep the order the filesystem returned
    /// them in. Unreadable entries are logged and skipped.
    pub fn walk(&self, root: &Path) -> Vec<IndexEntry> {
        let mut listings: Vec<(PathBuf, Vec<String>)> = Vec::new();
        let mut slots: HashMap<PathBuf, usize> = HashMap::new();

        for entry in WalkDir::new(root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e, root))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };

            if Self::is_directory(&entry) {
                slots.insert(entry.path().to_path_buf(), listings.len());
                listings.push((entry.path().to_path_buf(), Vec::new()));
                continue;
            }

            // A root that is itself a file has no enclosing walked directory
            let Some(slot) = entry.path().parent().and_then(|p| slots.get(p)) else {
                tracing::debug!("Skipping entry outside walked directories: {:?}", entry.path());
                continue;
            };

            listings[*slot]
                .1
                .push(entry.file_name().to_string_lossy().into_owned());
        }

        listings
            .into_iter()
            .filter(|(_, files)| !files.is_empty())
            .map(|(dir, files)| IndexEntry::new(dir.to_string_lossy().into_owned(), files))
            .collect()
    }

    /// Directories, including links that point at directories
    fn is_directory(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir())
    }

    /// Never excludes the root itself
    fn is_excluded(&self, entry: &DirEntry, root: &Path) -> bool {
        if entry.depth() == 0 || self.exclude_patterns.is_empty() {
            return false;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        let relative = path.strip_prefix(root).unwrap_or(path);

        let excluded = self.exclude_patterns.iter().any(|p| {
            p.matches_path(path) || p.matches_path(relative) || p.matches(name.as_ref())
        });

        if excluded {
            tracing::debug!("Skipping excluded entry: {:?}", path);
        }
        excluded
    }
}
