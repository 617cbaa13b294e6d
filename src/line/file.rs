//! File-backed line store
//!
//! Every mutating call reads the whole file, edits the line sequence and
//! rewrites the file before returning.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{LineBuffer, LineOps};

/// A text file addressed by 1-indexed line numbers
#[derive(Debug, Clone)]
pub struct LineFile {
    /// Path of the backing file
    path: PathBuf,
}

impl LineFile {
    /// Attach to a file path. The file is not touched until the first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create (or truncate) the file with the given initial lines
    pub fn create(path: impl Into<PathBuf>, lines: &[String]) -> Result<Self> {
        let file = Self::new(path);
        file.commit(&LineBuffer::from_lines(lines.to_vec()))?;
        tracing::info!(path = %file.path.display(), lines = lines.len(), "created file");
        Ok(file)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the current contents into a staging buffer
    pub fn stage(&self) -> Result<LineBuffer> {
        let text = fs::read_to_string(&self.path)?;
        Ok(LineBuffer::from_text(&text))
    }

    /// Replace the file contents with `buffer` in one write
    pub fn commit(&self, buffer: &LineBuffer) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(buffer.to_text().as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_data()?;

        tracing::debug!(path = %self.path.display(), lines = buffer.len(), "rewrote file");
        Ok(())
    }

    /// Stage, apply one edit, commit
    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut LineBuffer) -> Result<()>,
    {
        let mut buffer = self.stage()?;
        f(&mut buffer)?;
        self.commit(&buffer)
    }
}

impl LineOps for LineFile {
    fn line_count(&self) -> Result<usize> {
        Ok(self.stage()?.len())
    }

    fn read(&self, line: usize) -> Result<String> {
        self.stage()?.read(line)
    }

    fn overwrite(&mut self, line: usize, content: &str) -> Result<()> {
        self.edit(|buf| buf.overwrite(line, content))
    }

    fn insert(&mut self, line: usize, content: &str) -> Result<()> {
        self.edit(|buf| buf.insert(line, content))
    }

    fn append(&mut self, content: &str) -> Result<()> {
        self.edit(|buf| buf.append(content))
    }

    fn delete(&mut self, line: usize) -> Result<()> {
        self.edit(|buf| buf.delete(line))
    }
}
