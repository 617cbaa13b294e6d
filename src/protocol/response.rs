//! Response definitions
//!
//! Results of executing a command, before rendering.

use crate::table::TableView;

/// A response to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Mutation succeeded; message describes what changed
    Done(String),

    /// Table names in registration order
    Tables(Vec<String>),

    /// One table's contents
    Table(TableView),

    /// The help listing
    Help,

    /// Leave the shell
    Quit,
}

impl Response {
    /// Create a DONE response
    pub fn done(message: impl Into<String>) -> Self {
        Response::Done(message.into())
    }

    /// Whether the shell should stop after this response
    pub fn is_quit(&self) -> bool {
        matches!(self, Response::Quit)
    }
}
