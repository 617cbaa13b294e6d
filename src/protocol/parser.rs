//! Command parser
//!
//! Turns one input line into a `Command`.

use crate::error::{Result, TextDbError};

use super::{Command, CommandType};

/// Parse one line of input. Blank input yields `Ok(None)`.
pub fn parse_command(input: &str) -> Result<Option<Command>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((&first, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command_type = CommandType::from_keyword(first).ok_or_else(|| {
        TextDbError::InvalidCommand(format!("unknown command {:?}; try 'help'", first))
    })?;

    let command = match command_type {
        CommandType::Tables => no_args(command_type, args, Command::Tables)?,
        CommandType::Help => no_args(command_type, args, Command::Help)?,
        CommandType::Quit => no_args(command_type, args, Command::Quit)?,
        CommandType::View => Command::View {
            table: single_table(command_type, args)?,
        },
        CommandType::Delete => Command::Delete {
            table: single_table(command_type, args)?,
        },
        CommandType::Create => parse_create(args)?,
        CommandType::Insert => {
            let (row, table) = split_on_keyword(command_type, args, "into")?;
            Command::Insert { row, table }
        }
        CommandType::Remove => {
            let (row, table) = split_on_keyword(command_type, args, "from")?;
            Command::Remove { row, table }
        }
    };

    Ok(Some(command))
}

/// `create <table> with <a,b,c>`; columns may also be split by spaces
fn parse_create(args: &[&str]) -> Result<Command> {
    match args {
        [table, with, columns @ ..] if with.eq_ignore_ascii_case("with") && !columns.is_empty() => {
            let columns = columns
                .join(",")
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();
            if columns.is_empty() {
                return Err(usage(CommandType::Create));
            }
            Ok(Command::Create {
                table: table.to_string(),
                columns,
            })
        }
        _ => Err(usage(CommandType::Create)),
    }
}

/// `<row words...> <keyword> <table>`, splitting on the last `keyword`
fn split_on_keyword(
    command_type: CommandType,
    args: &[&str],
    keyword: &str,
) -> Result<(String, String)> {
    let pos = args
        .iter()
        .rposition(|word| word.eq_ignore_ascii_case(keyword))
        .ok_or_else(|| usage(command_type))?;

    let (row, rest) = args.split_at(pos);
    match (row, &rest[1..]) {
        ([_, ..], [table]) => Ok((row.join(" "), table.to_string())),
        _ => Err(usage(command_type)),
    }
}

fn single_table(command_type: CommandType, args: &[&str]) -> Result<String> {
    match args {
        [table] => Ok(table.to_string()),
        _ => Err(usage(command_type)),
    }
}

fn no_args(command_type: CommandType, args: &[&str], command: Command) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(usage(command_type))
    }
}

fn usage(command_type: CommandType) -> TextDbError {
    TextDbError::InvalidCommand(format!("usage: {}", command_type.usage()))
}
