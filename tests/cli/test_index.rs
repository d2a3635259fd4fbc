//! Tests for the index CLI command

use crate::cli::test_helpers::empty_fixture;
use crate::common::TestTree;
use filedex::cli::commands::index::{execute, IndexArgs};
use filedex::cli::OutputFormat;
use filedex::core::diagnostics::Diagnostic;

/// Index a tree with human output
#[test]
fn test_index_human() {
    let mut fx = empty_fixture();
    let tree = TestTree::nested();

    let args = IndexArgs {
        path: Some(tree.path().to_path_buf()),
        ..Default::default()
    };

    let result = execute(args, &mut fx.services, OutputFormat::Human);
    assert!(result.is_ok(), "Index should succeed: {:?}", result.err());
    assert_eq!(fx.services.index().file_count(), 8);
    assert!(fx.services.store.exists());
}

/// Index a tree with JSON output
#[test]
fn test_index_json() {
    let mut fx = empty_fixture();
    let tree = TestTree::docs();

    let args = IndexArgs {
        path: Some(tree.path().to_path_buf()),
        ..Default::default()
    };

    assert!(execute(args, &mut fx.services, OutputFormat::Json).is_ok());
    assert_eq!(fx.services.index().file_count(), 3);
}

/// Progress diagnostics bracket the walk
#[test]
fn test_index_reports_progress() {
    let mut fx = empty_fixture();
    fx.sink.clear();
    let tree = TestTree::docs();

    let args = IndexArgs {
        path: Some(tree.path().to_path_buf()),
        ..Default::default()
    };
    execute(args, &mut fx.services, OutputFormat::Json).unwrap();

    let events = fx.sink.events();
    assert!(matches!(events.first(), Some(Diagnostic::IndexStarted { .. })));
    assert_eq!(
        events.last(),
        Some(&Diagnostic::IndexCreated {
            directories: 1,
            files: 3
        })
    );
}

/// A path that doesn't exist gives an empty index, not an error
#[test]
fn test_index_missing_path() {
    let mut fx = empty_fixture();
    let missing = fx.tree.path().join("does-not-exist");

    let args = IndexArgs {
        path: Some(missing),
        ..Default::default()
    };

    let result = execute(args, &mut fx.services, OutputFormat::Human);
    assert!(result.is_ok());
    assert!(fx.services.index().is_empty());
}

/// Exclude patterns from the command line prune the walk
#[test]
fn test_index_with_exclude() {
    let mut fx = empty_fixture();
    let tree = TestTree::with_files(&["keep.txt", "node_modules/pkg/index.js", "tmp.swp"]);

    let args = IndexArgs {
        path: Some(tree.path().to_path_buf()),
        exclude: vec!["node_modules".to_string(), "*.swp".to_string()],
        follow_links: false,
    };

    execute(args, &mut fx.services, OutputFormat::Json).unwrap();
    assert_eq!(fx.services.index().file_count(), 1);
}

/// Invalid exclude pattern is reported as an error
#[test]
fn test_index_invalid_exclude() {
    let mut fx = empty_fixture();
    let tree = TestTree::docs();

    let args = IndexArgs {
        path: Some(tree.path().to_path_buf()),
        exclude: vec!["[broken".to_string()],
        follow_links: false,
    };

    let result = execute(args, &mut fx.services, OutputFormat::Human);
    let err = result.expect_err("Invalid pattern should fail");
    assert!(err.to_string().contains("[broken"));
}

/// Without a path the configured default root is used
#[test]
fn test_index_default_root() {
    let mut fx = empty_fixture();
    let tree = TestTree::docs();
    fx.services.config.indexing.default_root = tree.path().to_path_buf();

    execute(IndexArgs::default(), &mut fx.services, OutputFormat::Json).unwrap();

    assert_eq!(fx.services.index().root.as_deref(), Some(tree.root_str().as_str()));
}
