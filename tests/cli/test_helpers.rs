//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Services over a throwaway data directory
//! - A pre-indexed tree for search/info tests

use crate::common::{create_test_services, TestTree};
use filedex::cli::commands::index::{execute, IndexArgs};
use filedex::cli::OutputFormat;
use filedex::core::diagnostics::MemorySink;
use filedex::core::services::Services;
use tempfile::TempDir;

/// Services plus everything that must outlive them in a test
pub struct CliFixture {
    pub services: Services,
    pub sink: MemorySink,
    pub tree: TestTree,
    _data: TempDir,
}

/// Services with `tree` already indexed through the index command
pub fn indexed_fixture(tree: TestTree) -> CliFixture {
    let (mut services, sink, data) = create_test_services();

    let args = IndexArgs {
        path: Some(tree.path().to_path_buf()),
        ..Default::default()
    };
    execute(args, &mut services, OutputFormat::Json).expect("Failed to index tree");
    sink.clear();

    CliFixture {
        services,
        sink,
        tree,
        _data: data,
    }
}

/// Services with nothing indexed yet
pub fn empty_fixture() -> CliFixture {
    let (services, sink, data) = create_test_services();
    CliFixture {
        services,
        sink,
        tree: TestTree::with_files(&[]),
        _data: data,
    }
}
