//! Shared helpers for table store tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use textdb::config::{Config, WriteStrategy};
use textdb::table::TableStore;

pub const STRATEGIES: [WriteStrategy; 2] = [WriteStrategy::Staged, WriteStrategy::EveryEdit];

pub fn setup_temp_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.db");
    (temp_dir, path)
}

pub fn open_store(path: &Path, strategy: WriteStrategy) -> TableStore {
    let config = Config::builder()
        .db_path(path)
        .write_strategy(strategy)
        .build();
    TableStore::open_with(config).unwrap()
}

pub fn setup_temp_store(strategy: WriteStrategy) -> (TempDir, TableStore) {
    let (temp_dir, path) = setup_temp_path();
    let store = open_store(&path, strategy);
    (temp_dir, store)
}

/// Physical lines of the file, without newlines
pub fn file_lines(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    text.lines().map(str::to_string).collect()
}

/// Check every layout invariant against the file on disk
pub fn assert_consistent(store: &TableStore) {
    let lines = file_lines(store.path());
    let header = store.header();

    assert_eq!(header.lines, lines.len(), "header line count");
    assert_eq!(lines[1], format!("lines: {}", lines.len()));

    for entry in &header.tables {
        let start = entry.start();
        assert_eq!(lines[start - 1], "TABLE", "marker for {}", entry.name());
        assert_eq!(lines[start - 2], "", "separator before {}", entry.name());
        assert_eq!(lines[start], format!("name: {}", entry.name()));

        let rows: usize = lines[start + 4]
            .strip_prefix("rows: ")
            .unwrap()
            .parse()
            .unwrap();
        let terminator = start + 5 + rows;
        assert_eq!(lines[terminator], "", "terminator after {}", entry.name());
        assert!(
            lines[start + 5..terminator].iter().all(|row| !row.is_empty()),
            "rows of {} must not be blank",
            entry.name()
        );
    }
}
