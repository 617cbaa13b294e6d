//! Table block access
//!
//! Reads and writes the field and row lines of one table block, addressed
//! by the line of its `TABLE` marker.

use crate::error::{Result, TextDbError};
use crate::line::LineOps;

use super::layout::{field_line, parse_field, BlockField, BLOCK_FIELDS, TABLE_MARKER};
use super::TableView;

/// Text appended to create a block: marker, fields, blank terminator
pub fn render(name: &str, columns: &str, now: &str) -> String {
    [
        TABLE_MARKER.to_string(),
        field_line(BlockField::Name.key(), name),
        field_line(BlockField::Created.key(), now),
        field_line(BlockField::Updated.key(), now),
        field_line(BlockField::Columns.key(), columns),
        field_line(BlockField::Rows.key(), 0),
        String::new(),
    ]
    .join("\n")
}

/// Line of the first row of the block starting at `start`
pub const fn first_row_line(start: usize) -> usize {
    start + BLOCK_FIELDS
}

/// Fail unless `start` holds a `TABLE` marker
pub fn check_marker<L: LineOps + ?Sized>(lines: &L, table: &str, start: usize) -> Result<()> {
    let line = lines.read(start)?;
    if line != TABLE_MARKER {
        return Err(corrupt(
            table,
            start,
            format!("expected {:?}, found {:?}", TABLE_MARKER, line),
        ));
    }
    Ok(())
}

/// Value of one field line
pub fn read_field<L: LineOps + ?Sized>(
    lines: &L,
    table: &str,
    start: usize,
    field: BlockField,
) -> Result<String> {
    let line_no = field.line(start);
    let line = lines.read(line_no)?;
    parse_field(&line, field.key())
        .map(str::to_string)
        .ok_or_else(|| {
            corrupt(
                table,
                line_no,
                format!("expected '{}: ...', found {:?}", field.key(), line),
            )
        })
}

/// Overwrite one field line
pub fn write_field<L: LineOps + ?Sized>(
    lines: &mut L,
    start: usize,
    field: BlockField,
    value: impl std::fmt::Display,
) -> Result<()> {
    lines.overwrite(field.line(start), &field_line(field.key(), value))
}

/// Parsed `rows:` field
pub fn row_count<L: LineOps + ?Sized>(lines: &L, table: &str, start: usize) -> Result<usize> {
    let value = read_field(lines, table, start, BlockField::Rows)?;
    value.trim().parse::<usize>().map_err(|_| {
        corrupt(
            table,
            BlockField::Rows.line(start),
            format!("bad row count {:?}", value),
        )
    })
}

/// Row payloads in file order
pub fn read_rows<L: LineOps + ?Sized>(lines: &L, table: &str, start: usize) -> Result<Vec<String>> {
    let count = row_count(lines, table, start)?;
    let first = first_row_line(start);
    (first..first + count).map(|line| lines.read(line)).collect()
}

/// Number of lines to delete to remove the block at `start`: everything up
/// to the next blank line plus that blank line, or up to end of file
pub fn span<L: LineOps + ?Sized>(lines: &L, start: usize) -> Result<usize> {
    let total = lines.line_count()?;
    let mut line = start;
    while line <= total {
        if lines.read(line)?.is_empty() {
            return Ok(line - start + 1);
        }
        line += 1;
    }
    Ok(line - start)
}

/// Full view of the block at `start`
pub fn view<L: LineOps + ?Sized>(lines: &L, table: &str, start: usize) -> Result<TableView> {
    check_marker(lines, table, start)?;
    let columns = read_field(lines, table, start, BlockField::Columns)?;

    Ok(TableView {
        name: read_field(lines, table, start, BlockField::Name)?,
        created: read_field(lines, table, start, BlockField::Created)?,
        updated: read_field(lines, table, start, BlockField::Updated)?,
        columns: split_columns(&columns),
        rows: read_rows(lines, table, start)?,
    })
}

/// `a,b,c` -> `["a", "b", "c"]`; an empty list stays empty
pub fn split_columns(columns: &str) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }
    columns.split(',').map(|c| c.trim().to_string()).collect()
}

fn corrupt(table: &str, line: usize, reason: String) -> TextDbError {
    TextDbError::CorruptBlock {
        table: table.to_string(),
        line,
        reason,
    }
}
