//! Indexer integration tests
//!
//! Checks the built index against an independent listing of the tree.

use crate::common::{create_test_services, total_files, TestTree};
use filedex::core::indexer::Indexer;
use filedex::core::types::IndexEntry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Every directory under `root` with its direct file names, via read_dir
fn expected_listing(root: &Path) -> BTreeMap<String, Vec<String>> {
    fn visit(dir: &Path, out: &mut BTreeMap<String, Vec<String>>) {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).unwrap() {
            let entry = entry.unwrap();
            if entry.file_type().unwrap().is_dir() {
                visit(&entry.path(), out);
            } else {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        if !files.is_empty() {
            files.sort();
            out.insert(dir.to_string_lossy().into_owned(), files);
        }
    }

    let mut out = BTreeMap::new();
    visit(root, &mut out);
    out
}

fn as_listing(entries: &[IndexEntry]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|e| {
            let mut names = e.filenames.clone();
            names.sort();
            (e.directory_path.clone(), names)
        })
        .collect()
}

#[test]
fn test_index_matches_non_empty_directories() {
    let tree = TestTree::nested();

    let index = Indexer::default().scan(tree.path());

    assert_eq!(as_listing(&index.entries), expected_listing(tree.path()));
}

#[test]
fn test_index_has_no_empty_entries() {
    let tree = TestTree::nested();

    let index = Indexer::default().scan(tree.path());

    assert!(index.entries.iter().all(|e| !e.filenames.is_empty()));
    assert!(!index
        .entries
        .iter()
        .any(|e| e.directory_path.ends_with("empty") || e.directory_path.ends_with("empty_leaf")));
}

#[test]
fn test_index_directories_are_unique() {
    let tree = TestTree::nested();

    let index = Indexer::default().scan(tree.path());

    let listing = as_listing(&index.entries);
    assert_eq!(listing.len(), index.entries.len());
}

#[test]
fn test_index_is_idempotent() {
    let tree = TestTree::nested();
    let indexer = Indexer::default();

    let first = indexer.scan(tree.path());
    let second = indexer.scan(tree.path());

    assert_eq!(first.entries, second.entries);
    assert_eq!(first.root, second.root);
}

#[test]
fn test_rebuild_replaces_previous_index() {
    let (mut services, _sink, _data) = create_test_services();
    let first = TestTree::docs();
    let second = TestTree::with_files(&["only.txt"]);

    services.rebuild_index(first.path()).unwrap();
    assert_eq!(total_files(services.index()), 3);

    services.rebuild_index(second.path()).unwrap();
    assert_eq!(total_files(services.index()), 1);
    assert_eq!(services.store.read().unwrap(), *services.index());
}

#[test]
fn test_rebuild_sees_filesystem_changes() {
    let (mut services, _sink, _data) = create_test_services();
    let tree = TestTree::docs();

    services.rebuild_index(tree.path()).unwrap();
    tree.add_file("later/added.txt");
    services.rebuild_index(tree.path()).unwrap();

    assert_eq!(total_files(services.index()), 4);
    assert_eq!(services.index().directory_count(), 2);
}

#[test]
fn test_large_directory() {
    let tree = TestTree::bulk(250);

    let index = Indexer::default().scan(tree.path());

    assert_eq!(index.entries.len(), 1);
    assert_eq!(index.entries[0].filenames.len(), 250);
}

#[test]
fn test_unicode_names_survive_indexing() {
    let tree = TestTree::with_files(&["données/résumé 📄.pdf", "日本語/ファイル.txt"]);

    let index = Indexer::default().scan(tree.path());

    let names: Vec<&str> = index
        .entries
        .iter()
        .flat_map(|e| e.filenames.iter().map(String::as_str))
        .collect();
    assert!(names.contains(&"résumé 📄.pdf"));
    assert!(names.contains(&"ファイル.txt"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::with_files(&["open/a.txt", "locked/b.txt"]);
    let locked = tree.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits; nothing to observe in that case
    let readable_anyway = fs::read_dir(&locked).is_ok();

    let index = Indexer::default().scan(tree.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let open_listed = index
        .entries
        .iter()
        .any(|e| e.filenames == vec!["a.txt".to_string()]);
    assert!(open_listed);
    if !readable_anyway {
        assert_eq!(index.entries.len(), 1);
    }
}
