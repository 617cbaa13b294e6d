//! Line Store Module
//!
//! Line-addressed edits to a text file treated as a sequence of
//! newline-terminated lines. Knows nothing about tables.
//!
//! ## Addressing
//! ```text
//! ┌──────┬──────────────────────────┐
//! │  1   │ first line               │
//! │  2   │ second line              │
//! │ ...  │                          │
//! │  N   │ last line                │
//! │ N+1  │ (valid for insert only)  │
//! └──────┴──────────────────────────┘
//! ```
//!
//! ## Implementations
//! - `LineFile`: every mutating call re-reads the file, edits, rewrites it
//! - `LineBuffer`: the same edits on an in-memory `Vec<String>`, used to
//!   stage a batch of edits and write them back with `LineFile::commit`

mod buffer;
mod file;

pub use buffer::LineBuffer;
pub use file::LineFile;

use crate::error::Result;

/// 1-indexed line operations shared by the file and the staging buffer
pub trait LineOps {
    /// Number of lines currently held
    fn line_count(&self) -> Result<usize>;

    /// Line `line` without its trailing newline
    fn read(&self, line: usize) -> Result<String>;

    /// Replace line `line` in place. Content containing `\n` is rejected.
    fn overwrite(&mut self, line: usize, content: &str) -> Result<()>;

    /// Place `content` at `line`, shifting `line..` down; `line` may be
    /// `line_count() + 1`
    fn insert(&mut self, line: usize, content: &str) -> Result<()>;

    /// Add `content` after the last line. Embedded `\n` produce several lines.
    fn append(&mut self, content: &str) -> Result<()>;

    /// Remove line `line`, shifting everything below up by one
    fn delete(&mut self, line: usize) -> Result<()>;
}

/// Split a payload into the physical lines it occupies once written
pub(crate) fn split_content(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}
