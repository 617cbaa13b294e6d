//! Tests for LineFile
//!
//! These tests verify:
//! - Every edit is persisted to disk before the call returns
//! - Range errors leave the file unchanged
//! - Staging a buffer and committing it back

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use textdb::line::{LineFile, LineOps};
use textdb::TextDbError;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file(lines: &[&str]) -> (TempDir, PathBuf, LineFile) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lines.txt");
    let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    let file = LineFile::create(&path, &lines).unwrap();
    (temp_dir, path, file)
}

// =============================================================================
// Basic Tests
// =============================================================================

#[test]
fn test_create_writes_lines() {
    let (_temp, path, file) = setup_temp_file(&["META", "lines: 6"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "META\nlines: 6\n");
    assert_eq!(file.line_count().unwrap(), 2);
    assert!(file.exists());
}

#[test]
fn test_overwrite_persists() {
    let (_temp, path, mut file) = setup_temp_file(&["a", "b", "c"]);

    file.overwrite(2, "B").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nB\nc\n");
    assert_eq!(file.read(2).unwrap(), "B");
}

#[test]
fn test_overwrite_multiline_leaves_file_unchanged() {
    let (_temp, path, mut file) = setup_temp_file(&["a", "b", "c"]);

    assert!(matches!(
        file.overwrite(2, "x\ny"),
        Err(TextDbError::MultiLine { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
}

#[test]
fn test_insert_persists() {
    let (_temp, path, mut file) = setup_temp_file(&["a", "c"]);

    file.insert(2, "b").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
}

#[test]
fn test_append_persists() {
    let (_temp, path, mut file) = setup_temp_file(&["a"]);

    file.append("b\nc").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
}

#[test]
fn test_delete_persists() {
    let (_temp, path, mut file) = setup_temp_file(&["a", "b", "c"]);

    file.delete(3).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
}

#[test]
fn test_out_of_range_leaves_file_unchanged() {
    let (_temp, path, mut file) = setup_temp_file(&["a", "b"]);

    assert!(matches!(file.read(3), Err(TextDbError::OutOfRange { .. })));
    assert!(matches!(file.delete(5), Err(TextDbError::OutOfRange { .. })));
    assert!(matches!(
        file.overwrite(0, "x"),
        Err(TextDbError::OutOfRange { .. })
    ));

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = LineFile::new(temp_dir.path().join("missing.txt"));

    assert!(!file.exists());
    assert!(matches!(file.read(1), Err(TextDbError::Io(_))));
}

// =============================================================================
// Stage / Commit Tests
// =============================================================================

#[test]
fn test_stage_edit_commit() {
    let (_temp, path, file) = setup_temp_file(&["a", "b", "c"]);

    let mut staged = file.stage().unwrap();
    staged.delete(1).unwrap();
    staged.insert(3, "d").unwrap();
    staged.overwrite(1, "B").unwrap();

    // Nothing reaches disk before commit
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");

    file.commit(&staged).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "B\nc\nd\n");
}

#[test]
fn test_reads_file_written_elsewhere() {
    let (_temp, path, file) = setup_temp_file(&["a"]);

    fs::write(&path, "x\ny\nz").unwrap();

    assert_eq!(file.line_count().unwrap(), 3);
    assert_eq!(file.read(3).unwrap(), "z");
}
