//! Table Store Module
//!
//! Table and row semantics on top of the Line Store.
//!
//! ## Responsibilities
//! - Create the metadata header for a new file
//! - Append, locate and delete table blocks
//! - Insert and delete row lines inside a block
//! - Keep the header's line count and table offsets valid as lines shift
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Header (lines 1-5) + blank separator         │
//! │   META                                       │
//! │   lines: <total line count>                  │
//! │   created: <timestamp>                       │
//! │   updated: <timestamp>                       │
//! │   tables: [[start_line, "name"], ...]        │
//! │   <blank>                                    │
//! ├──────────────────────────────────────────────┤
//! │ Table block (start_line = TABLE line)        │
//! │   TABLE                                      │
//! │   name: <name>                               │
//! │   created: <timestamp>                       │
//! │   updated: <timestamp>                       │
//! │   columns: <a,b,c>                           │
//! │   rows: <n>                                  │
//! │   <row 1> ... <row n>                        │
//! │   <blank>                                    │
//! ├──────────────────────────────────────────────┤
//! │ ... further blocks ...                       │
//! └──────────────────────────────────────────────┘
//! ```

mod block;
mod header;
pub mod layout;
mod store;

pub use header::{MetaHeader, TableEntry};
pub use layout::BlockField;
pub use store::TableStore;

/// Snapshot of one table block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub name: String,
    pub created: String,
    pub updated: String,
    pub columns: Vec<String>,
    pub rows: Vec<String>,
}
