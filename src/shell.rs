//! Shell
//!
//! Routes parsed commands to the table store and renders the results.
//! Errors are turned into messages so an interactive loop can keep going.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::Result;
use crate::protocol::{parse_command, Command, Response, HELP_TEXT};
use crate::table::{TableStore, TableView};

/// Outcome of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print (empty for blank input)
    pub text: String,

    /// The command failed
    pub is_error: bool,

    /// The user asked to leave
    pub quit: bool,
}

/// Command front end over a `TableStore`
pub struct Shell {
    store: TableStore,
}

impl Shell {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// Execute a command
    ///
    /// Routes commands to the matching table store operation
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        match command {
            Command::Tables => Ok(Response::Tables(self.store.list_tables())),
            Command::Create { table, columns } => {
                self.store.create_table(&table, columns.as_slice())?;
                Ok(Response::done(format!("created table {}", table)))
            }
            Command::View { table } => Ok(Response::Table(self.store.view_table(&table)?)),
            Command::Delete { table } => {
                self.store.delete_table(&table)?;
                Ok(Response::done(format!("deleted table {}", table)))
            }
            Command::Insert { row, table } => {
                self.store.insert_row(&table, &row)?;
                Ok(Response::done(format!("inserted 1 row into {}", table)))
            }
            Command::Remove { row, table } => {
                let removed = self.store.delete_row(&table, &row)?;
                Ok(Response::done(format!("removed {} row(s) from {}", removed, table)))
            }
            Command::Help => Ok(Response::Help),
            Command::Quit => Ok(Response::Quit),
        }
    }

    /// Parse, execute and render one line of input
    pub fn handle_line(&mut self, input: &str) -> Reply {
        let command = match parse_command(input) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::plain(String::new()),
            Err(e) => return Reply::failure(e.to_string()),
        };

        let keyword = command.command_type().keyword();
        let target = command.table().map(str::to_string);

        match self.execute(command) {
            Ok(response) => Reply {
                quit: response.is_quit(),
                text: render(&response),
                is_error: false,
            },
            Err(e) => {
                tracing::warn!(
                    command = keyword,
                    table = target.as_deref(),
                    error = %e,
                    "command failed"
                );
                let text = match target {
                    Some(table) => format!("{} {}: {}", keyword, table, e),
                    None => format!("{}: {}", keyword, e),
                };
                Reply::failure(text)
            }
        }
    }
}

impl Reply {
    fn plain(text: String) -> Self {
        Self {
            text,
            is_error: false,
            quit: false,
        }
    }

    fn failure(text: String) -> Self {
        Self {
            text,
            is_error: true,
            quit: false,
        }
    }
}

/// Render a response as display text
pub fn render(response: &Response) -> String {
    match response {
        Response::Done(message) => message.clone(),
        Response::Tables(names) if names.is_empty() => "(no tables)".to_string(),
        Response::Tables(names) => names.join("\n"),
        Response::Table(view) => render_table(view),
        Response::Help => HELP_TEXT.to_string(),
        Response::Quit => String::new(),
    }
}

/// Rows split on `,` under the column headers
fn render_table(view: &TableView) -> String {
    let cells: Vec<Vec<&str>> = view.rows.iter().map(|row| row.split(',').collect()).collect();
    let width = cells
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(view.columns.len()))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut builder = Builder::default();
    builder.push_record((0..width).map(|i| match view.columns.get(i) {
        Some(column) => column.clone(),
        None => format!("col{}", i + 1),
    }));
    for row in &cells {
        builder.push_record((0..width).map(|i| row.get(i).copied().unwrap_or("").to_string()));
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{}\n({} rows)", table, view.rows.len())
}
