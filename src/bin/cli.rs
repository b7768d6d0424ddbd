//! RosterDB CLI
//!
//! Command-line driver for a RosterDB record file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rosterdb::protocol::{decode_command, encode_outcome, Command};
use rosterdb::{Config, RecordDraft, Store, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// RosterDB CLI
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(about = "Single-file record store with an identifier index")]
#[command(version)]
struct Args {
    /// Record file (created if missing)
    #[arg(short, long, default_value = "database.txt")]
    file: PathBuf,

    /// fsync after every change
    #[arg(long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a record; its ID is assigned automatically
    Add {
        /// Unique positive integer
        identifier: String,

        name: String,

        /// Positive integer
        age: String,

        /// DD.MM.YYYY
        date_of_birth: String,
    },

    /// Print every record
    List,

    /// Print records whose field equals a value (case-insensitive)
    Search {
        /// ID, Identifier, Name, Age or "Date of Birth"
        field: String,

        value: String,
    },

    /// Delete records whose field equals a value (case-insensitive)
    Delete {
        /// ID, Identifier, Name, Age or "Date of Birth"
        field: String,

        value: String,
    },

    /// Delete every record
    Clear,

    /// Copy the record file elsewhere (".txt" is added if missing)
    Save { destination: PathBuf },

    /// Print the ID the next record will get
    NextId,

    /// Check whether an identifier is in use
    Exists { identifier: String },

    /// Print the record with an identifier
    Get { identifier: String },

    /// Read commands from stdin, one per line
    Shell,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rosterdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("RosterDB v{}", rosterdb::VERSION);

    let sync_strategy = if args.sync {
        SyncStrategy::EveryWrite
    } else {
        SyncStrategy::OnClose
    };
    let config = Config::builder()
        .path(&args.file)
        .sync_strategy(sync_strategy)
        .build();

    let mut store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let command = match args.command {
        Commands::Shell => {
            if let Err(e) = run_shell(&mut store) {
                tracing::error!("Shell error: {}", e);
                std::process::exit(1);
            }
            return;
        }
        Commands::Add {
            identifier,
            name,
            age,
            date_of_birth,
        } => Command::Insert {
            draft: RecordDraft::new(identifier, name, age, date_of_birth),
        },
        Commands::List => Command::ListAll,
        Commands::Search { field, value } => Command::Search { field, value },
        Commands::Delete { field, value } => Command::DeleteBy { field, value },
        Commands::Clear => Command::Clear,
        Commands::Save { destination } => Command::CopyOut { destination },
        Commands::NextId => Command::NextId,
        Commands::Exists { identifier } => Command::IdentifierExists { identifier },
        Commands::Get { identifier } => Command::Get { identifier },
    };

    match store.execute(with_save_extension(command)) {
        Ok(outcome) => println!("{}", encode_outcome(&outcome)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Interactive loop: one command per line until EOF or `quit`
fn run_shell(store: &mut Store) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                writeln!(stdout, "{}", SHELL_HELP)?;
                continue;
            }
            _ => {}
        }

        let result = decode_command(line).and_then(|command| {
            tracing::debug!(
                command = command.command_type().name(),
                mutation = command.is_mutation(),
                "executing"
            );
            store.execute(with_save_extension(command))
        });

        match result {
            Ok(outcome) => writeln!(stdout, "{}", encode_outcome(&outcome))?,
            Err(e) => writeln!(stdout, "Error: {}", e)?,
        }
        stdout.flush()?;
    }

    Ok(())
}

/// Saved copies always get a `.txt` name: "backup" → "backup.txt",
/// "backup.csv" → "backup.csv.txt"
fn with_save_extension(command: Command) -> Command {
    match command {
        Command::CopyOut { destination } => {
            let has_txt = destination
                .file_name()
                .map(|name| name.to_string_lossy().ends_with(".txt"))
                .unwrap_or(false);
            if has_txt {
                return Command::CopyOut { destination };
            }
            let mut name = destination.into_os_string();
            name.push(".txt");
            Command::CopyOut {
                destination: PathBuf::from(name),
            }
        }
        other => other,
    }
}

const SHELL_HELP: &str = "\
add <identifier> <name> <age> <dd.mm.yyyy>
append <identifier> <record-line>
list | next-id | clear
exists <identifier> | get <identifier>
search <field> <value> | delete <field> <value>
open <path> | save <path>
help | quit
Quote arguments containing spaces: search \"date of birth\" 01.01.1990";
