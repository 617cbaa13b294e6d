//! File layout constants
//!
//! All knowledge of where things sit inside the file lives here.

/// First line of every file
pub const META_MARKER: &str = "META";

/// First line of every table block
pub const TABLE_MARKER: &str = "TABLE";

/// Header line numbers (1-indexed)
pub const LN_META: usize = 1;
pub const LN_LINES: usize = 2;
pub const LN_CREATED: usize = 3;
pub const LN_UPDATED: usize = 4;
pub const LN_TABLES: usize = 5;

/// Lines occupied by the header itself
pub const HEADER_LEN: usize = 5;

/// Line count of a fresh file: the header plus its blank separator
pub const INITIAL_LINES: usize = HEADER_LEN + 1;

/// `TABLE` marker plus the five field lines; rows start right after
pub const BLOCK_FIELDS: usize = 6;

/// Lines added by creating a table: fields plus the blank terminator
pub const BLOCK_OVERHEAD: usize = BLOCK_FIELDS + 1;

/// Timestamp format used for `created:` / `updated:`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field lines of a table block, by offset from its `TABLE` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockField {
    Name,
    Created,
    Updated,
    Columns,
    Rows,
}

impl BlockField {
    /// Offset from the block's `TABLE` line
    pub const fn offset(self) -> usize {
        match self {
            BlockField::Name => 1,
            BlockField::Created => 2,
            BlockField::Updated => 3,
            BlockField::Columns => 4,
            BlockField::Rows => 5,
        }
    }

    /// Key written before the `: `
    pub const fn key(self) -> &'static str {
        match self {
            BlockField::Name => "name",
            BlockField::Created => "created",
            BlockField::Updated => "updated",
            BlockField::Columns => "columns",
            BlockField::Rows => "rows",
        }
    }

    /// Physical line of this field in the block starting at `start`
    pub const fn line(self, start: usize) -> usize {
        start + self.offset()
    }
}

/// Current local time in the file's timestamp format
pub fn now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// `key: value`
pub fn field_line(key: &str, value: impl std::fmt::Display) -> String {
    format!("{}: {}", key, value)
}

/// Value of a `key: value` line, or `None` if the key does not match.
/// A bare `key:` (trailing space stripped by an editor) reads as empty.
pub fn parse_field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}
