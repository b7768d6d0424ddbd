//! Outcome definitions
//!
//! Represents the result of an executed command.

use crate::record::Record;

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Completed with nothing to report (open, clear)
    Done,

    /// Offset at which an appended line was written
    Offset(u64),

    /// The record stored by an insert
    Inserted(Record),

    /// Next `ID` to be assigned
    NextId(u64),

    /// Answer to an existence check
    Exists(bool),

    /// Record lines (list, search)
    Lines(Vec<String>),

    /// A single record line, if found (get)
    Line(Option<String>),

    /// Number of lines removed by a delete
    Removed(usize),

    /// Number of bytes copied out
    Copied(u64),
}
