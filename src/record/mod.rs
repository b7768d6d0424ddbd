//! Record Module
//!
//! The on-disk record grammar and the typed view of a record.
//!
//! ## Line Format
//! ```text
//! ┌──────┬────────────┬──────┬─────┬───────────────┐
//! │  ID  │ Identifier │ Name │ Age │ Date of Birth │ \n
//! └──────┴────────────┴──────┴─────┴───────────────┘
//!   0          1          2     3          4
//! ```
//! Fields are joined by a bare `,`. There is no quoting or escaping, so no
//! field may contain a comma or a line break.
//!
//! ## Responsibilities
//! - Resolve field names (case-insensitive) to positions
//! - Format and parse record lines
//! - Validate raw driver input before it becomes a record

mod codec;
mod validate;

use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::index::IdentifierKey;

pub use codec::{
    decode_record, encode_record, field_at, field_matches, split_fields, FIELD_SEPARATOR,
    LINE_TERMINATOR,
};
pub use validate::{RecordDraft, ValidDraft, ValidationError};

/// Number of fields in a record line
pub const FIELD_COUNT: usize = 5;

// =============================================================================
// Field
// =============================================================================

/// The closed set of record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Identifier,
    Name,
    Age,
    DateOfBirth,
}

impl Field {
    /// All fields in line order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Id,
        Field::Identifier,
        Field::Name,
        Field::Age,
        Field::DateOfBirth,
    ];

    /// Zero-based position of this field within a line
    pub fn position(self) -> usize {
        match self {
            Field::Id => 0,
            Field::Identifier => 1,
            Field::Name => 2,
            Field::Age => 3,
            Field::DateOfBirth => 4,
        }
    }

    /// Column heading used when rendering records
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Identifier => "Identifier",
            Field::Name => "Name",
            Field::Age => "Age",
            Field::DateOfBirth => "Date of Birth",
        }
    }
}

impl FromStr for Field {
    type Err = RosterError;

    /// Resolve a field name, ignoring case
    ///
    /// "ID" → Id, "identifier" → Identifier, "Date of Birth" → DateOfBirth
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "identifier" => Ok(Field::Identifier),
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            "date of birth" => Ok(Field::DateOfBirth),
            _ => Err(RosterError::UnknownField(name.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Record
// =============================================================================

/// A parsed record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Auto-assigned, strictly increasing
    pub id: u64,
    /// User-supplied unique key
    pub identifier: u64,
    pub name: String,
    pub age: u32,
    /// `DD.MM.YYYY`
    pub date_of_birth: String,
}

impl Record {
    /// The index key for this record
    pub fn identifier_key(&self) -> IdentifierKey {
        IdentifierKey::from(self.identifier)
    }

    /// Text of a single field, as it appears in the line
    pub fn field(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::Identifier => self.identifier.to_string(),
            Field::Name => self.name.clone(),
            Field::Age => self.age.to_string(),
            Field::DateOfBirth => self.date_of_birth.clone(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_record(self))
    }
}
