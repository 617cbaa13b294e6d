//! Error types for textdb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using TextDbError
pub type Result<T> = std::result::Result<T, TextDbError>;

/// Unified error type for textdb operations
#[derive(Debug, Error)]
pub enum TextDbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Line Store Errors
    // -------------------------------------------------------------------------
    #[error("Line {line} out of range (file has {total} lines)")]
    OutOfRange { line: usize, total: usize },

    #[error("Line {line} cannot be overwritten with multi-line content")]
    MultiLine { line: usize },

    // -------------------------------------------------------------------------
    // Table Store Errors
    // -------------------------------------------------------------------------
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Table already exists: {0}")]
    DuplicateTable(String),

    #[error("Corrupt header: {0}")]
    CorruptHeader(String),

    #[error("Corrupt block for table '{table}' at line {line}: {reason}")]
    CorruptBlock {
        table: String,
        line: usize,
        reason: String,
    },

    #[error("Invalid table name: {0:?}")]
    InvalidName(String),

    #[error("Invalid row: {0:?}")]
    InvalidRow(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Front End Errors
    // -------------------------------------------------------------------------
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
