//! Protocol codec
//!
//! Parsing shell lines into commands and rendering outcomes as text.

use std::path::PathBuf;

use crate::error::{Result, RosterError};
use crate::record::RecordDraft;

use super::{Command, Outcome};

// =============================================================================
// Command Decoding
// =============================================================================

/// Split a line into tokens
///
/// Whitespace separates tokens; a double quoted run is kept together with
/// its spaces and may be empty (`""`). Quotes can appear mid-token:
/// `a"b c"` is the single token `ab c`.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(RosterError::Protocol("unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Decode one shell line into a command
///
/// Verbs are case-insensitive. Field names are passed through untouched;
/// the store resolves them.
pub fn decode_command(line: &str) -> Result<Command> {
    let tokens = tokenize(line)?;
    let (verb, args) = tokens
        .split_first()
        .ok_or_else(|| RosterError::Protocol("empty command".to_string()))?;
    let verb = verb.to_lowercase();

    match verb.as_str() {
        "add" => {
            let [identifier, name, age, date_of_birth] = expect_args::<4>(&verb, args)?;
            Ok(Command::Insert {
                draft: RecordDraft::new(identifier, name, age, date_of_birth),
            })
        }
        "append" => {
            let [identifier, line] = expect_args::<2>(&verb, args)?;
            Ok(Command::Append { identifier, line })
        }
        "list" => {
            let [] = expect_args::<0>(&verb, args)?;
            Ok(Command::ListAll)
        }
        "next-id" => {
            let [] = expect_args::<0>(&verb, args)?;
            Ok(Command::NextId)
        }
        "clear" => {
            let [] = expect_args::<0>(&verb, args)?;
            Ok(Command::Clear)
        }
        "exists" => {
            let [identifier] = expect_args::<1>(&verb, args)?;
            Ok(Command::IdentifierExists { identifier })
        }
        "get" => {
            let [identifier] = expect_args::<1>(&verb, args)?;
            Ok(Command::Get { identifier })
        }
        "search" => {
            let [field, value] = expect_args::<2>(&verb, args)?;
            Ok(Command::Search { field, value })
        }
        "delete" => {
            let [field, value] = expect_args::<2>(&verb, args)?;
            Ok(Command::DeleteBy { field, value })
        }
        "open" => {
            let [path] = expect_args::<1>(&verb, args)?;
            Ok(Command::OpenFile {
                path: PathBuf::from(path),
            })
        }
        "save" => {
            let [destination] = expect_args::<1>(&verb, args)?;
            Ok(Command::CopyOut {
                destination: PathBuf::from(destination),
            })
        }
        _ => Err(RosterError::Protocol(format!("unknown command: {}", verb))),
    }
}

fn expect_args<const N: usize>(verb: &str, args: &[String]) -> Result<[String; N]> {
    <[String; N]>::try_from(args.to_vec()).map_err(|_| {
        RosterError::Protocol(format!(
            "{} expects {} argument(s), got {}",
            verb,
            N,
            args.len()
        ))
    })
}

// =============================================================================
// Outcome Encoding
// =============================================================================

/// Render an outcome for display
pub fn encode_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Done => "OK".to_string(),
        Outcome::Offset(offset) => format!("OK (offset {})", offset),
        Outcome::Inserted(record) => format!("Record added: {}", record),
        Outcome::NextId(id) => id.to_string(),
        Outcome::Exists(exists) => exists.to_string(),
        Outcome::Lines(lines) if lines.is_empty() => "No records found.".to_string(),
        Outcome::Lines(lines) => lines.join("\n"),
        Outcome::Line(Some(line)) => line.clone(),
        Outcome::Line(None) => "Not found.".to_string(),
        Outcome::Removed(count) => format!("{} record(s) deleted", count),
        Outcome::Copied(bytes) => format!("{} bytes copied", bytes),
    }
}
