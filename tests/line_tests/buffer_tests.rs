//! Tests for LineBuffer
//!
//! These tests verify:
//! - Parsing file text into lines and back
//! - 1-indexed read/overwrite/insert/append/delete
//! - Range checks at both ends
//! - Insert/delete round trip

use textdb::line::{LineBuffer, LineOps};
use textdb::TextDbError;

// =============================================================================
// Helper Functions
// =============================================================================

fn buffer(lines: &[&str]) -> LineBuffer {
    LineBuffer::from_lines(lines.iter().map(|l| l.to_string()).collect())
}

// =============================================================================
// Text Conversion Tests
// =============================================================================

#[test]
fn test_from_text_trailing_newline() {
    let buf = LineBuffer::from_text("a\nb\n");
    assert_eq!(buf.lines(), &["a".to_string(), "b".to_string()]);
}

#[test]
fn test_from_text_without_trailing_newline() {
    let buf = LineBuffer::from_text("a\nb");
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.read(2).unwrap(), "b");
}

#[test]
fn test_from_text_keeps_blank_lines() {
    let buf = LineBuffer::from_text("a\n\nb\n\n");
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.read(2).unwrap(), "");
    assert_eq!(buf.read(4).unwrap(), "");
}

#[test]
fn test_empty_text() {
    let buf = LineBuffer::from_text("");
    assert!(buf.is_empty());
    assert_eq!(buf.to_text(), "");
}

#[test]
fn test_to_text_terminates_every_line() {
    let buf = buffer(&["META", "", "x"]);
    assert_eq!(buf.to_text(), "META\n\nx\n");
}

// =============================================================================
// Read / Overwrite Tests
// =============================================================================

#[test]
fn test_read_each_line() {
    let buf = buffer(&["one", "two", "three"]);
    assert_eq!(buf.read(1).unwrap(), "one");
    assert_eq!(buf.read(3).unwrap(), "three");
}

#[test]
fn test_read_out_of_range() {
    let buf = buffer(&["one", "two"]);

    assert!(matches!(
        buf.read(0),
        Err(TextDbError::OutOfRange { line: 0, total: 2 })
    ));
    assert!(matches!(
        buf.read(3),
        Err(TextDbError::OutOfRange { line: 3, total: 2 })
    ));
}

#[test]
fn test_overwrite_then_read() {
    let mut buf = buffer(&["one", "two", "three"]);

    buf.overwrite(2, "TWO").unwrap();

    assert_eq!(buf.read(2).unwrap(), "TWO");
    assert_eq!(buf.line_count().unwrap(), 3);
}

#[test]
fn test_overwrite_rejects_multiline_content() {
    let mut buf = buffer(&["one", "two", "three"]);

    assert!(matches!(
        buf.overwrite(2, "a\nb"),
        Err(TextDbError::MultiLine { line: 2 })
    ));
    assert_eq!(buf.line_count().unwrap(), 3);
    assert_eq!(buf.read(2).unwrap(), "two");
}

#[test]
fn test_overwrite_out_of_range() {
    let mut buf = buffer(&["one"]);
    assert!(matches!(
        buf.overwrite(2, "x"),
        Err(TextDbError::OutOfRange { .. })
    ));
    assert_eq!(buf.lines(), &["one".to_string()]);
}

// =============================================================================
// Insert / Append / Delete Tests
// =============================================================================

#[test]
fn test_insert_shifts_following_lines() {
    let mut buf = buffer(&["a", "b", "c"]);

    buf.insert(2, "x").unwrap();

    assert_eq!(buf.line_count().unwrap(), 4);
    assert_eq!(buf.read(2).unwrap(), "x");
    assert_eq!(buf.read(3).unwrap(), "b");
    assert_eq!(buf.read(4).unwrap(), "c");
}

#[test]
fn test_insert_at_front() {
    let mut buf = buffer(&["a"]);
    buf.insert(1, "first").unwrap();
    assert_eq!(buf.lines(), &["first".to_string(), "a".to_string()]);
}

#[test]
fn test_insert_one_past_end_appends() {
    let mut buf = buffer(&["a", "b"]);
    buf.insert(3, "c").unwrap();
    assert_eq!(buf.read(3).unwrap(), "c");
}

#[test]
fn test_insert_out_of_range() {
    let mut buf = buffer(&["a", "b"]);
    assert!(matches!(
        buf.insert(4, "x"),
        Err(TextDbError::OutOfRange { line: 4, total: 2 })
    ));
    assert!(matches!(buf.insert(0, "x"), Err(TextDbError::OutOfRange { .. })));
}

#[test]
fn test_append_multiline_content() {
    let mut buf = buffer(&["a"]);

    buf.append("\nTABLE\nname: t").unwrap();

    assert_eq!(buf.line_count().unwrap(), 4);
    assert_eq!(buf.read(2).unwrap(), "");
    assert_eq!(buf.read(3).unwrap(), "TABLE");
    assert_eq!(buf.read(4).unwrap(), "name: t");
}

#[test]
fn test_delete_shifts_following_lines() {
    let mut buf = buffer(&["a", "b", "c"]);

    buf.delete(1).unwrap();

    assert_eq!(buf.lines(), &["b".to_string(), "c".to_string()]);
}

#[test]
fn test_delete_out_of_range() {
    let mut buf = buffer(&["a"]);
    assert!(matches!(buf.delete(2), Err(TextDbError::OutOfRange { .. })));
}

#[test]
fn test_insert_then_delete_restores_sequence() {
    let original = buffer(&["a", "b", "c", "d"]);

    for n in 1..=5 {
        let mut buf = original.clone();
        buf.insert(n, "tmp").unwrap();
        buf.delete(n).unwrap();
        assert_eq!(buf, original, "round trip at line {}", n);
    }
}
