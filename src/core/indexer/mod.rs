//! Directory indexing module.
//!
//! Walks a directory tree and records, for every directory holding files,
//! the names of those files. The resulting [`Index`](crate::core::types::Index)
//! is persisted whole and replaces any earlier one.
//!
//! - No file contents or metadata are read, only listings
//! - Unreadable directories are skipped without error
//! - Directories without files are left out

pub mod builder;
pub mod walker;

pub use builder::Indexer;
pub use walker::DirectoryWalker;
