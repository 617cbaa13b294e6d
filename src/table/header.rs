//! Metadata header
//!
//! In-memory model of file lines 1-5. Loaded on open, mutated by every
//! table operation, and written back with the operation's line edits.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextDbError};
use crate::line::LineOps;

use super::layout::{
    field_line, parse_field, INITIAL_LINES, LN_CREATED, LN_LINES, LN_META, LN_TABLES, LN_UPDATED,
    META_MARKER,
};

/// One entry of the table directory, stored as `[start_line, name]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry(pub usize, pub String);

impl TableEntry {
    /// Line of this table's `TABLE` marker
    pub fn start(&self) -> usize {
        self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }
}

/// The metadata header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaHeader {
    /// Total line count of the file
    pub lines: usize,

    /// Set once when the file is created
    pub created: String,

    /// Refreshed by every mutating operation
    pub updated: String,

    /// Table directory, in registration order
    pub tables: Vec<TableEntry>,
}

impl MetaHeader {
    /// Header of a brand new file
    pub fn new(now: &str) -> Self {
        Self {
            lines: INITIAL_LINES,
            created: now.to_string(),
            updated: now.to_string(),
            tables: Vec::new(),
        }
    }

    /// Read and validate lines 1-5
    pub fn read_from<L: LineOps + ?Sized>(lines: &L) -> Result<Self> {
        let read = |n: usize| {
            lines.read(n).map_err(|e| match e {
                TextDbError::OutOfRange { .. } => {
                    TextDbError::CorruptHeader(format!("missing header line {}", n))
                }
                other => other,
            })
        };

        let marker = read(LN_META)?;
        if marker != META_MARKER {
            return Err(TextDbError::CorruptHeader(format!(
                "line {}: expected {:?}, found {:?}",
                LN_META, META_MARKER, marker
            )));
        }

        let count_line = read(LN_LINES)?;
        let count = expect_field(&count_line, "lines", LN_LINES)?;
        let count = count.trim().parse::<usize>().map_err(|_| {
            TextDbError::CorruptHeader(format!("line {}: bad line count {:?}", LN_LINES, count))
        })?;

        let created = expect_field(&read(LN_CREATED)?, "created", LN_CREATED)?.to_string();
        let updated = expect_field(&read(LN_UPDATED)?, "updated", LN_UPDATED)?.to_string();

        let tables_line = read(LN_TABLES)?;
        let tables_json = expect_field(&tables_line, "tables", LN_TABLES)?;
        let tables: Vec<TableEntry> = serde_json::from_str(tables_json).map_err(|e| {
            TextDbError::CorruptHeader(format!("line {}: bad table directory: {}", LN_TABLES, e))
        })?;

        Ok(Self {
            lines: count,
            created,
            updated,
            tables,
        })
    }

    /// Render all five header lines
    pub fn to_lines(&self) -> Result<Vec<String>> {
        Ok(vec![
            META_MARKER.to_string(),
            field_line("lines", self.lines),
            field_line("created", &self.created),
            field_line("updated", &self.updated),
            self.tables_line()?,
        ])
    }

    /// Write the mutable header lines (`lines`, `updated`, `tables`)
    pub fn write_to<L: LineOps + ?Sized>(&self, lines: &mut L) -> Result<()> {
        lines.overwrite(LN_LINES, &field_line("lines", self.lines))?;
        lines.overwrite(LN_UPDATED, &field_line("updated", &self.updated))?;
        lines.overwrite(LN_TABLES, &self.tables_line()?)?;
        Ok(())
    }

    fn tables_line(&self) -> Result<String> {
        Ok(field_line("tables", serde_json::to_string(&self.tables)?))
    }

    // =========================================================================
    // Table directory
    // =========================================================================

    pub fn find(&self, name: &str) -> Option<&TableEntry> {
        self.tables.iter().find(|entry| entry.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Start line of `name`'s block
    pub fn start_of(&self, name: &str) -> Result<usize> {
        self.find(name)
            .map(TableEntry::start)
            .ok_or_else(|| TextDbError::TableNotFound(name.to_string()))
    }

    /// Table names in registration order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.iter().map(|entry| entry.name().to_string()).collect()
    }

    /// Append a directory entry
    pub fn register(&mut self, start: usize, name: &str) {
        self.tables.push(TableEntry(start, name.to_string()));
    }

    /// Drop `name`'s directory entry
    pub fn unregister(&mut self, name: &str) {
        self.tables.retain(|entry| entry.name() != name);
    }

    /// Move every table whose start line is strictly after `start`.
    /// The entry at `start` itself never moves.
    pub fn shift_after(&mut self, start: usize, amount: isize) {
        for entry in self.tables.iter_mut().filter(|entry| entry.0 > start) {
            entry.0 = entry.0.saturating_add_signed(amount);
        }
    }

    /// Refresh the `updated` timestamp
    pub fn touch(&mut self, now: &str) {
        self.updated = now.to_string();
    }
}

fn expect_field<'a>(line: &'a str, key: &str, line_no: usize) -> Result<&'a str> {
    parse_field(line, key).ok_or_else(|| {
        TextDbError::CorruptHeader(format!(
            "line {}: expected '{}: ...', found {:?}",
            line_no, key, line
        ))
    })
}
