//! Offset index implementation
//!
//! HashMap-based identifier → offset table.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::{Result, RosterError};
use crate::record::{field_at, Field};
use crate::storage::Line;

use super::IdentifierKey;

/// Identifier → byte offset of the record's first byte
#[derive(Debug, Default, Clone)]
pub struct OffsetIndex {
    entries: HashMap<IdentifierKey, u64>,
}

impl OffsetIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a fresh scan of `lines`
    ///
    /// Each line contributes `fields[1] → line.offset`. On error the current
    /// contents are left untouched. Returns the number of entries.
    pub fn rebuild<I>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<Line>>,
    {
        let mut entries = HashMap::new();

        for line in lines {
            let line = line?;
            let identifier = field_at(&line.text, Field::Identifier, line.offset)?;

            if entries
                .insert(IdentifierKey::from(identifier), line.offset)
                .is_some()
            {
                return Err(RosterError::corrupt(
                    line.offset,
                    format!("identifier {} appears more than once", identifier),
                ));
            }
        }

        self.entries = entries;
        Ok(self.entries.len())
    }

    /// Add an entry for a new record
    ///
    /// Returns false (and leaves the existing offset alone) if the key is
    /// already present.
    pub fn insert(&mut self, key: IdentifierKey, offset: u64) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(offset);
                true
            }
        }
    }

    /// Point an existing entry at a new offset
    ///
    /// Returns false if the key is not indexed.
    pub fn relocate(&mut self, key: &str, offset: u64) -> bool {
        match self.entries.get_mut(key) {
            Some(existing) => {
                *existing = offset;
                true
            }
            None => false,
        }
    }

    /// Remove an entry, returning its offset
    pub fn remove(&mut self, key: &str) -> Option<u64> {
        self.entries.remove(key)
    }

    /// Offset of a record's line
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over `(identifier, offset)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&IdentifierKey, u64)> + '_ {
        self.entries.iter().map(|(key, offset)| (key, *offset))
    }
}
