//! Record codec
//!
//! Formatting and parsing between `Record` and one line of the file.
//! Lines handled here never include their terminator.

use crate::error::{Result, RosterError};

use super::{Field, Record, FIELD_COUNT};

/// Separator between fields
pub const FIELD_SEPARATOR: char = ',';

/// Terminator appended after every record line
pub const LINE_TERMINATOR: u8 = b'\n';

// =============================================================================
// Encoding
// =============================================================================

/// Format a record as a line (without terminator)
pub fn encode_record(record: &Record) -> String {
    let fields = Field::ALL.map(|field| record.field(field));
    fields.join(",")
}

// =============================================================================
// Decoding
// =============================================================================

/// Split a line on every comma; no escape handling
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Raw text of one field
///
/// `offset` is the position of the line in the file and is only used to
/// report a line that is too short.
pub fn field_at(line: &str, field: Field, offset: u64) -> Result<&str> {
    line.split(FIELD_SEPARATOR)
        .nth(field.position())
        .ok_or_else(|| {
            RosterError::corrupt(
                offset,
                format!("line has no {} field (position {})", field, field.position()),
            )
        })
}

/// Parse a full record line
pub fn decode_record(line: &str, offset: u64) -> Result<Record> {
    let fields = split_fields(line);
    if fields.len() < FIELD_COUNT {
        return Err(RosterError::corrupt(
            offset,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    Ok(Record {
        id: parse_number(fields[0], Field::Id, offset)?,
        identifier: parse_number(fields[1], Field::Identifier, offset)?,
        name: fields[2].to_string(),
        age: parse_number(fields[3], Field::Age, offset)?,
        date_of_birth: fields[4].to_string(),
    })
}

/// Case-insensitive comparison used by search and delete
///
/// Lexical only: "07" and "7" are different values.
pub fn field_matches(text: &str, value: &str) -> bool {
    text == value || text.to_lowercase() == value.to_lowercase()
}

fn parse_number<T: std::str::FromStr>(text: &str, field: Field, offset: u64) -> Result<T> {
    text.parse().map_err(|_| {
        RosterError::corrupt(offset, format!("{} is not an integer: {:?}", field, text))
    })
}
