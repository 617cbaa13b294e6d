//! Command definitions
//!
//! Represents commands typed into the shell.

/// Help listing shown by `help`
pub const HELP_TEXT: &str = "\
tables                          views all tables
create <table> with <columns>   creates table with comma-separated columns
view <table>                    views all rows in table
delete <table>                  deletes table
insert <row> into <table>       inserts row into table
remove <row> from <table>       removes every matching row from table
help                            shows this help
quit                            exits the program";

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Tables,
    Create,
    View,
    Delete,
    Insert,
    Remove,
    Help,
    Quit,
}

impl CommandType {
    /// Look up a command keyword (case-insensitive)
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "tables" => Some(CommandType::Tables),
            "create" => Some(CommandType::Create),
            "view" => Some(CommandType::View),
            "delete" => Some(CommandType::Delete),
            "insert" => Some(CommandType::Insert),
            "remove" => Some(CommandType::Remove),
            "help" => Some(CommandType::Help),
            "quit" | "exit" => Some(CommandType::Quit),
            _ => None,
        }
    }

    /// Keyword as typed
    pub fn keyword(self) -> &'static str {
        match self {
            CommandType::Tables => "tables",
            CommandType::Create => "create",
            CommandType::View => "view",
            CommandType::Delete => "delete",
            CommandType::Insert => "insert",
            CommandType::Remove => "remove",
            CommandType::Help => "help",
            CommandType::Quit => "quit",
        }
    }

    /// Usage line for error messages
    pub fn usage(self) -> &'static str {
        match self {
            CommandType::Tables => "tables",
            CommandType::Create => "create <table> with <columns>",
            CommandType::View => "view <table>",
            CommandType::Delete => "delete <table>",
            CommandType::Insert => "insert <row> into <table>",
            CommandType::Remove => "remove <row> from <table>",
            CommandType::Help => "help",
            CommandType::Quit => "quit",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List table names
    Tables,

    /// Create a table
    Create { table: String, columns: Vec<String> },

    /// Show a table's rows
    View { table: String },

    /// Delete a table
    Delete { table: String },

    /// Append a row
    Insert { row: String, table: String },

    /// Delete all rows equal to `row`
    Remove { row: String, table: String },

    Help,

    Quit,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Tables => CommandType::Tables,
            Command::Create { .. } => CommandType::Create,
            Command::View { .. } => CommandType::View,
            Command::Delete { .. } => CommandType::Delete,
            Command::Insert { .. } => CommandType::Insert,
            Command::Remove { .. } => CommandType::Remove,
            Command::Help => CommandType::Help,
            Command::Quit => CommandType::Quit,
        }
    }

    /// Table the command targets, if any
    pub fn table(&self) -> Option<&str> {
        match self {
            Command::Create { table, .. }
            | Command::View { table }
            | Command::Delete { table }
            | Command::Insert { table, .. }
            | Command::Remove { table, .. } => Some(table.as_str()),
            Command::Tables | Command::Help | Command::Quit => None,
        }
    }
}
