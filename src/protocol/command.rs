//! Command definitions
//!
//! Represents operations requested by a driver.

use std::path::PathBuf;

use crate::record::RecordDraft;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    OpenFile,
    Append,
    Insert,
    NextId,
    IdentifierExists,
    ListAll,
    Search,
    DeleteBy,
    Clear,
    CopyOut,
    Get,
}

impl CommandType {
    /// Short name used in logs
    pub fn name(self) -> &'static str {
        match self {
            CommandType::OpenFile => "open",
            CommandType::Append => "append",
            CommandType::Insert => "insert",
            CommandType::NextId => "next-id",
            CommandType::IdentifierExists => "exists",
            CommandType::ListAll => "list",
            CommandType::Search => "search",
            CommandType::DeleteBy => "delete",
            CommandType::Clear => "clear",
            CommandType::CopyOut => "save",
            CommandType::Get => "get",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bind the store to another file
    OpenFile { path: PathBuf },

    /// Append a preformatted line under an identifier
    Append { identifier: String, line: String },

    /// Validate, number and append a new record
    Insert { draft: RecordDraft },

    /// Next `ID` to be assigned
    NextId,

    /// Whether an identifier is indexed
    IdentifierExists { identifier: String },

    /// Every line in file order
    ListAll,

    /// Lines whose field equals a value (case-insensitive)
    Search { field: String, value: String },

    /// Remove lines whose field equals a value (case-insensitive)
    DeleteBy { field: String, value: String },

    /// Remove every record
    Clear,

    /// Copy the file to another path
    CopyOut { destination: PathBuf },

    /// Line of the record with this identifier
    Get { identifier: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::OpenFile { .. } => CommandType::OpenFile,
            Command::Append { .. } => CommandType::Append,
            Command::Insert { .. } => CommandType::Insert,
            Command::NextId => CommandType::NextId,
            Command::IdentifierExists { .. } => CommandType::IdentifierExists,
            Command::ListAll => CommandType::ListAll,
            Command::Search { .. } => CommandType::Search,
            Command::DeleteBy { .. } => CommandType::DeleteBy,
            Command::Clear => CommandType::Clear,
            Command::CopyOut { .. } => CommandType::CopyOut,
            Command::Get { .. } => CommandType::Get,
        }
    }

    /// Whether executing this command changes the record file
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Append { .. }
                | Command::Insert { .. }
                | Command::DeleteBy { .. }
                | Command::Clear
        )
    }
}
