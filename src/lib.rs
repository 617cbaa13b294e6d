//! # textdb
//!
//! A minimal table/row store kept in a single flat text file:
//! - Metadata header recording line count, timestamps and table offsets
//! - Table blocks addressed purely by line-number arithmetic
//! - Offset maintenance as rows and tables are inserted and deleted
//! - Staged (single write per operation) or per-edit file rewrites
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Shell / CLI (text commands)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Table Store                           │
//! │        (header model, block layout, offset upkeep)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  LineFile   │◄─commit──│ LineBuffer  │
//!   │ (rewrites)  │──stage──►│  (staging)  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod line;
pub mod table;
pub mod protocol;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TextDbError, Result};
pub use config::{Config, WriteStrategy};
pub use table::{TableStore, TableView};
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of textdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
