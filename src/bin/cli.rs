//! textdb CLI
//!
//! Interactive shell over a textdb file. Commands can also be passed with
//! `-c` or piped on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use textdb::{Config, Shell, TableStore, WriteStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// textdb shell
#[derive(Parser, Debug)]
#[command(name = "textdb")]
#[command(about = "Table/row store kept in a single flat text file")]
#[command(version)]
struct Args {
    /// Database file (created if missing)
    #[arg(default_value = "_temp.db")]
    file: PathBuf,

    /// Rewrite the file after every line edit instead of once per operation
    #[arg(long)]
    every_edit: bool,

    /// Fail instead of creating a missing file
    #[arg(long)]
    no_create: bool,

    /// Print the raw file when the shell exits
    #[arg(long)]
    dump: bool,

    /// Run these commands and exit
    #[arg(short, long = "command")]
    commands: Vec<String>,
}

fn main() {
    // Logs go to stderr so shell output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,textdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let strategy = if args.every_edit {
        WriteStrategy::EveryEdit
    } else {
        WriteStrategy::Staged
    };

    let config = Config::builder()
        .db_path(&args.file)
        .create_if_missing(!args.no_create)
        .write_strategy(strategy)
        .build();

    let store = match TableStore::open_with(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    tracing::debug!("textdb v{} on {}", textdb::VERSION, args.file.display());

    let mut shell = Shell::new(store);

    let result = if args.commands.is_empty() {
        run_interactive(&mut shell)
    } else {
        run_commands(&mut shell, &args.commands);
        Ok(())
    };

    if let Err(e) = result {
        tracing::error!("Input error: {}", e);
        std::process::exit(1);
    }

    if args.dump {
        match std::fs::read_to_string(&args.file) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                tracing::error!("Failed to read {}: {}", args.file.display(), e);
                std::process::exit(1);
            }
        }
    }
}

/// Prompt, read a line, reply; until `quit` or end of input
fn run_interactive(shell: &mut Shell) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();

    loop {
        write!(stdout, "db> ")?;
        stdout.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let reply = shell.handle_line(&input);
        print_reply(&reply);
        if reply.quit {
            return Ok(());
        }
    }
}

fn run_commands(shell: &mut Shell, commands: &[String]) {
    for command in commands {
        let reply = shell.handle_line(command);
        print_reply(&reply);
        if reply.quit {
            break;
        }
    }
}

fn print_reply(reply: &textdb::shell::Reply) {
    if reply.text.is_empty() {
        return;
    }
    if reply.is_error {
        eprintln!("error: {}", reply.text);
    } else {
        println!("{}", reply.text);
    }
}
