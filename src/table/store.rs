//! Table Store
//!
//! Translates table/row operations into Line Store edits and keeps the
//! metadata header consistent with the shifted lines.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, WriteStrategy};
use crate::error::{Result, TextDbError};
use crate::line::{LineFile, LineOps};

use super::block;
use super::header::MetaHeader;
use super::layout::{self, BlockField, BLOCK_OVERHEAD};
use super::TableView;

/// A table store kept in one flat text file
///
/// ## Consistency
/// The in-memory `MetaHeader` is the single source of truth for the line
/// count and the table directory. Each operation mutates it alongside the
/// line edits and writes it back at the end.
///
/// - `WriteStrategy::Staged`: edits go to a buffer; the file is written
///   once and the in-memory header is only replaced after that write succeeds
/// - `WriteStrategy::EveryEdit`: every edit rewrites the file; a failure
///   mid-operation leaves file and header partially updated
///
/// Single writer only. Callers must serialize access.
pub struct TableStore {
    /// Store configuration
    config: Config,

    /// Backing file
    file: LineFile,

    /// Header as of the last completed operation
    header: MetaHeader,
}

impl TableStore {
    /// Open or create a store at `path` with default settings
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(Config::builder().db_path(path).build())
    }

    /// Open or create a store with the given config
    ///
    /// On open:
    /// 1. Create the file with an empty header if it is missing
    /// 2. Load and validate the header
    /// 3. Refresh the header's `updated` timestamp
    pub fn open_with(config: Config) -> Result<Self> {
        let file = LineFile::new(&config.db_path);

        if !file.exists() {
            if !config.create_if_missing {
                return Err(TextDbError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("database file {} does not exist", config.db_path.display()),
                )));
            }
            let mut initial = MetaHeader::new(&layout::now()).to_lines()?;
            initial.push(String::new());
            LineFile::create(&config.db_path, &initial)?;
        }

        let header = MetaHeader::read_from(&file.stage()?)?;
        tracing::debug!(
            path = %config.db_path.display(),
            lines = header.lines,
            tables = header.tables.len(),
            "opened store"
        );

        let mut store = Self {
            config,
            file,
            header,
        };

        let now = layout::now();
        store.mutate(|header, _| {
            header.touch(&now);
            Ok(())
        })?;

        Ok(store)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Table names in registration order
    pub fn list_tables(&self) -> Vec<String> {
        self.header.table_names()
    }

    pub fn table_exists(&self, name: &str) -> bool {
        self.header.contains(name)
    }

    /// Fields and rows of one table
    pub fn view_table(&self, name: &str) -> Result<TableView> {
        let start = self.header.start_of(name)?;
        let snapshot = self.file.stage()?;
        block::view(&snapshot, name, start)
    }

    /// Row payloads of one table, in insertion order
    pub fn rows(&self, name: &str) -> Result<Vec<String>> {
        let start = self.header.start_of(name)?;
        let snapshot = self.file.stage()?;
        block::check_marker(&snapshot, name, start)?;
        block::read_rows(&snapshot, name, start)
    }

    /// Column names of one table
    pub fn columns(&self, name: &str) -> Result<Vec<String>> {
        let start = self.header.start_of(name)?;
        let snapshot = self.file.stage()?;
        block::check_marker(&snapshot, name, start)?;
        let columns = block::read_field(&snapshot, name, start, BlockField::Columns)?;
        Ok(block::split_columns(&columns))
    }

    /// Current metadata header
    pub fn header(&self) -> &MetaHeader {
        &self.header
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Re-read the header from disk, discarding the in-memory copy
    pub fn refresh(&mut self) -> Result<()> {
        self.header = MetaHeader::read_from(&self.file.stage()?)?;
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new empty table block and register it
    pub fn create_table<S: AsRef<str>>(&mut self, name: &str, columns: &[S]) -> Result<()> {
        validate_name(name)?;
        let columns = join_columns(columns)?;

        if self.header.contains(name) {
            return Err(TextDbError::DuplicateTable(name.to_string()));
        }

        let now = layout::now();
        let start = self.mutate(|header, lines| {
            let start = header.lines + 1;
            lines.append(&block::render(name, &columns, &now))?;
            header.register(start, name);
            header.lines += BLOCK_OVERHEAD;
            header.touch(&now);
            Ok(start)
        })?;

        tracing::debug!(table = name, start, "created table");
        Ok(())
    }

    /// Delete a table block and its terminator, returning the lines removed
    pub fn delete_table(&mut self, name: &str) -> Result<usize> {
        let start = self.header.start_of(name)?;

        let now = layout::now();
        let span = self.mutate(|header, lines| {
            block::check_marker(&*lines, name, start)?;
            let span = block::span(&*lines, start)?;
            for _ in 0..span {
                lines.delete(start)?;
            }

            header.shift_after(start, -(span as isize));
            header.unregister(name);
            header.lines = header.lines.saturating_sub(span);
            header.touch(&now);
            Ok(span)
        })?;

        tracing::debug!(table = name, start, span, "deleted table");
        Ok(span)
    }

    /// Insert `row` after the table's last row
    pub fn insert_row(&mut self, table: &str, row: &str) -> Result<()> {
        validate_row(row)?;
        let start = self.header.start_of(table)?;

        let now = layout::now();
        let line = self.mutate(|header, lines| {
            block::check_marker(&*lines, table, start)?;
            let rows = block::row_count(&*lines, table, start)?;
            let line = block::first_row_line(start) + rows;

            lines.insert(line, row)?;
            block::write_field(lines, start, BlockField::Rows, rows + 1)?;
            block::write_field(lines, start, BlockField::Updated, &now)?;

            header.lines += 1;
            header.shift_after(start, 1);
            header.touch(&now);
            Ok(line)
        })?;

        tracing::debug!(table, line, "inserted row");
        Ok(())
    }

    /// Delete every row of `table` equal to `row`, returning how many went.
    /// No match leaves the file untouched.
    pub fn delete_row(&mut self, table: &str, row: &str) -> Result<usize> {
        let start = self.header.start_of(table)?;

        let snapshot = self.file.stage()?;
        block::check_marker(&snapshot, table, start)?;
        if !block::read_rows(&snapshot, table, start)?
            .iter()
            .any(|existing| existing == row)
        {
            tracing::debug!(table, "no matching row");
            return Ok(0);
        }

        let now = layout::now();
        let deleted = self.mutate(|header, lines| {
            let rows = block::row_count(&*lines, table, start)?;
            let first = block::first_row_line(start);

            let mut deleted = 0;
            for line in (first..first + rows).rev() {
                if lines.read(line)? == row {
                    lines.delete(line)?;
                    header.lines = header.lines.saturating_sub(1);
                    deleted += 1;
                }
            }

            block::write_field(lines, start, BlockField::Rows, rows - deleted)?;
            block::write_field(lines, start, BlockField::Updated, &now)?;

            header.shift_after(start, -(deleted as isize));
            header.touch(&now);
            Ok(deleted)
        })?;

        tracing::debug!(table, deleted, "deleted rows");
        Ok(deleted)
    }

    /// Run one operation's edits under the configured write strategy, then
    /// write the header back
    fn mutate<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut MetaHeader, &mut dyn LineOps) -> Result<T>,
    {
        match self.config.write_strategy {
            WriteStrategy::Staged => {
                let mut buffer = self.file.stage()?;
                let mut header = self.header.clone();

                let out = op(&mut header, &mut buffer)?;
                header.write_to(&mut buffer)?;
                self.file.commit(&buffer)?;

                self.header = header;
                Ok(out)
            }
            WriteStrategy::EveryEdit => {
                let out = op(&mut self.header, &mut self.file)?;
                self.header.write_to(&mut self.file)?;
                Ok(out)
            }
        }
    }
}

/// Names must fit on one non-blank line
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.contains(['\n', '\r']) {
        return Err(TextDbError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Rows must fit on one line and must not read as the blank terminator
fn validate_row(row: &str) -> Result<()> {
    if row.is_empty() || row.contains(['\n', '\r']) {
        return Err(TextDbError::InvalidRow(row.to_string()));
    }
    Ok(())
}

fn join_columns<S: AsRef<str>>(columns: &[S]) -> Result<String> {
    let columns: Vec<&str> = columns.iter().map(|c| c.as_ref().trim()).collect();
    if let Some(bad) = columns.iter().find(|c| c.contains(['\n', '\r'])) {
        return Err(TextDbError::InvalidName(bad.to_string()));
    }
    Ok(columns.join(","))
}
