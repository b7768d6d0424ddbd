//! Boundary validation
//!
//! The store appends whatever line it is given. Everything a caller types in
//! goes through `RecordDraft::validate` first so that the fields satisfy the
//! line grammar (no separators, positive numbers, `DD.MM.YYYY` dates).

use thiserror::Error;

use super::Record;

/// Reasons raw input cannot become a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Identifier must be an integer, got {0:?}")]
    IdentifierNotInteger(String),

    #[error("Identifier must be positive")]
    IdentifierNotPositive,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name cannot contain a comma or line break")]
    NameContainsSeparator,

    #[error("Age must be a positive integer, got {0:?}")]
    InvalidAge(String),

    #[error("Date of Birth must be in format DD.MM.YYYY, got {0:?}")]
    InvalidDateOfBirth(String),
}

/// Unvalidated input for a new record, as typed by a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub identifier: String,
    pub name: String,
    pub age: String,
    pub date_of_birth: String,
}

/// A draft whose fields all passed validation; only missing its `ID`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    identifier: u64,
    name: String,
    age: u32,
    date_of_birth: String,
}

impl RecordDraft {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            age: age.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Check every field, trimming surrounding whitespace first
    ///
    /// Fields are checked in order (identifier, name, age, date of birth)
    /// and the first failure is returned.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let identifier = validate_identifier(&self.identifier)?;
        let name = validate_name(&self.name)?;
        let age = validate_age(&self.age)?;
        let date_of_birth = validate_date_of_birth(&self.date_of_birth)?;

        Ok(ValidDraft {
            identifier,
            name,
            age,
            date_of_birth,
        })
    }
}

impl ValidDraft {
    pub fn identifier(&self) -> u64 {
        self.identifier
    }

    /// Attach the auto-assigned `ID`
    pub fn into_record(self, id: u64) -> Record {
        Record {
            id,
            identifier: self.identifier,
            name: self.name,
            age: self.age,
            date_of_birth: self.date_of_birth,
        }
    }
}

// =============================================================================
// Field Checks
// =============================================================================

/// Parse a positive integer identifier
pub fn validate_identifier(raw: &str) -> Result<u64, ValidationError> {
    let text = raw.trim();
    let value: i128 = text
        .parse()
        .map_err(|_| ValidationError::IdentifierNotInteger(text.to_string()))?;
    if value <= 0 {
        return Err(ValidationError::IdentifierNotPositive);
    }
    u64::try_from(value).map_err(|_| ValidationError::IdentifierNotInteger(text.to_string()))
}

/// Non-empty, and free of anything that would break the line grammar
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.contains([',', '\n', '\r']) {
        return Err(ValidationError::NameContainsSeparator);
    }
    Ok(name.to_string())
}

/// Parse a positive integer age
pub fn validate_age(raw: &str) -> Result<u32, ValidationError> {
    let text = raw.trim();
    match text.parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(ValidationError::InvalidAge(text.to_string())),
    }
}

/// Exactly `DD.MM.YYYY`: two digits, dot, two digits, dot, four digits
///
/// Only the shape is checked; "31.02.2000" is accepted.
pub fn validate_date_of_birth(raw: &str) -> Result<String, ValidationError> {
    let text = raw.trim();
    let bytes = text.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });

    if well_formed {
        Ok(text.to_string())
    } else {
        Err(ValidationError::InvalidDateOfBirth(text.to_string()))
    }
}
