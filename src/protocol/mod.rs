//! Protocol Module
//!
//! The text command language spoken by the shell front end.
//!
//! ## Commands
//! ```text
//! tables                          list tables
//! create <table> with <a,b,c>     create table with columns
//! view <table>                    show all rows of a table
//! delete <table>                  delete a table
//! insert <row> into <table>       append a row
//! remove <row> from <table>       delete every row equal to <row>
//! help                            show help
//! quit | exit                     leave the shell
//! ```
//!
//! Keywords are case-insensitive. Tokens are separated by whitespace; a row
//! may span several tokens and is rejoined with single spaces.

mod command;
mod parser;
mod response;

pub use command::{Command, CommandType, HELP_TEXT};
pub use parser::parse_command;
pub use response::Response;
