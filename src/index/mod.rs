//! Index Module
//!
//! In-memory map from a record's identifier to the byte offset of its line.
//!
//! ## Responsibilities
//! - Rebuild from a full scan of the record file on open
//! - Take one entry per append, keyed by identifier text
//! - Drop or re-point entries after the file is rewritten
//!
//! ## Data Structure Choice
//! A plain HashMap owned by the store:
//! - Lookups only ever need exact keys, never ranges
//! - The store is single-threaded, so no lock around it
//! - Nothing is persisted; the file is always authoritative

mod table;

use std::borrow::Borrow;
use std::fmt;

pub use table::OffsetIndex;

/// Index key: the identifier in its decimal text form
///
/// Integers convert through their decimal rendering, so `42u64` and `"42"`
/// are the same key. Text is taken as-is: `"042"` is a different key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentifierKey(String);

impl IdentifierKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<u64> for IdentifierKey {
    fn from(identifier: u64) -> Self {
        Self(identifier.to_string())
    }
}

impl From<&str> for IdentifierKey {
    fn from(identifier: &str) -> Self {
        Self(identifier.to_string())
    }
}

impl From<String> for IdentifierKey {
    fn from(identifier: String) -> Self {
        Self(identifier)
    }
}

impl From<&String> for IdentifierKey {
    fn from(identifier: &String) -> Self {
        Self(identifier.clone())
    }
}

impl Borrow<str> for IdentifierKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
