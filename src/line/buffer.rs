//! In-memory line buffer
//!
//! Staging area for a batch of line edits.

use crate::error::{Result, TextDbError};

use super::{split_content, LineOps};

/// Lines of a file held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Parse file text; a trailing newline does not open an extra line
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        Self::from_lines(split_content(body))
    }

    /// File text with every line newline-terminated
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Borrow all lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Map a 1-indexed line inside `[1, len]` to a vec index
    fn index_of(&self, line: usize) -> Result<usize> {
        if line == 0 || line > self.lines.len() {
            return Err(TextDbError::OutOfRange {
                line,
                total: self.lines.len(),
            });
        }
        Ok(line - 1)
    }
}

impl LineOps for LineBuffer {
    fn line_count(&self) -> Result<usize> {
        Ok(self.lines.len())
    }

    fn read(&self, line: usize) -> Result<String> {
        let idx = self.index_of(line)?;
        Ok(self.lines[idx].clone())
    }

    fn overwrite(&mut self, line: usize, content: &str) -> Result<()> {
        let idx = self.index_of(line)?;
        if content.contains('\n') {
            return Err(TextDbError::MultiLine { line });
        }
        self.lines[idx] = content.to_string();
        Ok(())
    }

    fn insert(&mut self, line: usize, content: &str) -> Result<()> {
        if line == 0 || line > self.lines.len() + 1 {
            return Err(TextDbError::OutOfRange {
                line,
                total: self.lines.len(),
            });
        }
        let idx = line - 1;
        self.lines.splice(idx..idx, split_content(content));
        Ok(())
    }

    fn append(&mut self, content: &str) -> Result<()> {
        self.lines.extend(split_content(content));
        Ok(())
    }

    fn delete(&mut self, line: usize) -> Result<()> {
        let idx = self.index_of(line)?;
        self.lines.remove(idx);
        Ok(())
    }
}
