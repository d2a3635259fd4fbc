//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Each match mode
//! - Empty term guard
//! - Empty index
//! - Output format variations

use crate::cli::test_helpers::{empty_fixture, indexed_fixture};
use crate::common::TestTree;
use filedex::cli::commands::search::{execute, SearchArgs};
use filedex::cli::OutputFormat;
use filedex::core::diagnostics::Diagnostic;
use filedex::core::types::SearchMode;
use std::fs;

fn args(term: &str, mode: Option<SearchMode>) -> SearchArgs {
    SearchArgs {
        term: term.to_string(),
        mode,
        paths_only: false,
    }
}

/// Contains search with human output writes the results file
#[test]
fn test_search_contains_human() {
    let fx = indexed_fixture(TestTree::docs());

    let result = execute(args("report", None), &fx.services, OutputFormat::Human);
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());

    let written = fs::read_to_string(fx.services.searcher.results_path()).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.lines().all(|l| l.contains("report")));
}

/// Ends-with search in JSON format
#[test]
fn test_search_ends_with_json() {
    let fx = indexed_fixture(TestTree::docs());

    let result = execute(
        args("csv", Some(SearchMode::EndsWith)),
        &fx.services,
        OutputFormat::Json,
    );
    assert!(result.is_ok());

    let written = fs::read_to_string(fx.services.searcher.results_path()).unwrap();
    assert_eq!(written.lines().count(), 1);
    assert!(written.trim_end().ends_with("/data.csv"));
}

/// Mode falls back to the configured default
#[test]
fn test_search_uses_default_mode() {
    let mut fx = indexed_fixture(TestTree::docs());
    fx.services.config.search.default_mode = SearchMode::StartsWith;

    execute(args("final", None), &fx.services, OutputFormat::Json).unwrap();

    let written = fs::read_to_string(fx.services.searcher.results_path()).unwrap();
    assert!(written.is_empty(), "starts-with 'final' should match nothing");
}

/// Paths-only output
#[test]
fn test_search_paths_only() {
    let fx = indexed_fixture(TestTree::nested());

    let search = SearchArgs {
        term: ".md".to_string(),
        mode: Some(SearchMode::EndsWith),
        paths_only: true,
    };
    assert!(execute(search, &fx.services, OutputFormat::Human).is_ok());
}

/// Empty term is a soft no-op
#[test]
fn test_search_empty_term() {
    let fx = indexed_fixture(TestTree::docs());

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(args("", None), &fx.services, format);
        assert!(result.is_ok(), "Empty term must not be an error");
    }

    assert_eq!(
        fx.sink.events(),
        vec![Diagnostic::EmptySearchTerm, Diagnostic::EmptySearchTerm]
    );
    assert!(!fx.services.searcher.results_path().exists());
}

/// Searching before any index exists
#[test]
fn test_search_without_index() {
    let fx = empty_fixture();

    let result = execute(args("report", None), &fx.services, OutputFormat::Human);
    assert!(result.is_ok());

    let written = fs::read_to_string(fx.services.searcher.results_path()).unwrap();
    assert!(written.is_empty());
}

/// No matches still succeeds
#[test]
fn test_search_no_matches() {
    let fx = indexed_fixture(TestTree::docs());

    let result = execute(
        args("nonexistent_name_xyz", Some(SearchMode::Contains)),
        &fx.services,
        OutputFormat::Human,
    );
    assert!(result.is_ok());
}

/// Results file tracks only the latest search
#[test]
fn test_search_overwrites_previous_results() {
    let fx = indexed_fixture(TestTree::docs());

    execute(args("report", None), &fx.services, OutputFormat::Json).unwrap();
    execute(args("data", None), &fx.services, OutputFormat::Json).unwrap();

    let written = fs::read_to_string(fx.services.searcher.results_path()).unwrap();
    assert_eq!(written.lines().count(), 1);
    assert!(written.contains("data.csv"));
}

/// Results live next to the tree's normalized root
#[test]
fn test_search_paths_are_normalized() {
    let fx = indexed_fixture(TestTree::docs());

    execute(args("data", None), &fx.services, OutputFormat::Json).unwrap();

    let root = fx.tree.root_str().replace('\\', "/");
    let written = fs::read_to_string(fx.services.searcher.results_path()).unwrap();
    assert_eq!(written, format!("{root}/data.csv\n"));
}
