//! Store Module
//!
//! The operation engine that keeps the record file and its index in step.
//!
//! ## Responsibilities
//! - Rebuild the index from the file on open and on rebind
//! - Append records and index them at their pre-write offset
//! - Answer scans (list, search, next id) straight from the file
//! - Rewrite the file on delete and resynchronize the index

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::index::{IdentifierKey, OffsetIndex};
use crate::protocol::{Command, Outcome};
use crate::record::{decode_record, encode_record, field_at, field_matches, Field, Record, RecordDraft};
use crate::storage::RecordFile;

/// Whether the bound file holds any bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// File length is zero and the index is empty
    Empty,
    /// File length is non-zero
    Populated,
}

/// File-backed record store
///
/// ## Consistency Model
///
/// - The file is authoritative; the index is a rebuildable accelerator
/// - Every mutation takes `&mut self`, so operations are serialized by the
///   caller holding the store
/// - A mutation either lands in both file and index, or in neither
///
/// ## Index Maintenance
///
/// | Operation              | Index update                               |
/// |------------------------|--------------------------------------------|
/// | open / open_file       | full rebuild by scan                       |
/// | append / insert        | one insert at the pre-write offset         |
/// | delete_by identifier   | drop removed keys, re-point survivors      |
/// | delete_by other fields | full rebuild by scan                       |
/// | clear                  | emptied                                    |
pub struct Store {
    /// Store configuration (path tracks the bound file)
    config: Config,

    /// The bound record file
    file: RecordFile,

    /// Identifier → offset of the record's line
    index: OffsetIndex,
}

impl Store {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Create the record file if it doesn't exist
    /// 2. Rebuild the index by scanning every line
    /// 3. Ready to serve requests
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let file = RecordFile::open(&config.path, config.sync_strategy)?;
        let mut index = OffsetIndex::new();
        let records = index.rebuild(file.lines()?)?;

        info!(path = %file.path().display(), records, "opened record file");

        Ok(Self {
            config,
            file,
            index,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified record file
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::builder().path(path.as_ref()).build())
    }

    /// Bind the store to another file, creating it if missing
    ///
    /// On error the current binding and index are kept.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let file = RecordFile::open(path, self.config.sync_strategy)?;
        let mut index = OffsetIndex::new();
        let records = index.rebuild(file.lines()?)?;

        self.file = file;
        self.index = index;
        self.config.path = path.to_path_buf();

        info!(path = %path.display(), records, "switched record file");
        Ok(())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::OpenFile { path } => {
                self.open_file(&path)?;
                Ok(Outcome::Done)
            }
            Command::Append { identifier, line } => {
                Ok(Outcome::Offset(self.append(identifier, &line)?))
            }
            Command::Insert { draft } => Ok(Outcome::Inserted(self.insert(&draft)?)),
            Command::NextId => Ok(Outcome::NextId(self.next_id()?)),
            Command::IdentifierExists { identifier } => {
                Ok(Outcome::Exists(self.identifier_exists(identifier)))
            }
            Command::ListAll => Ok(Outcome::Lines(self.list_all()?)),
            Command::Search { field, value } => Ok(Outcome::Lines(self.search(&field, &value)?)),
            Command::DeleteBy { field, value } => {
                Ok(Outcome::Removed(self.delete_by(&field, &value)?))
            }
            Command::Clear => {
                self.clear()?;
                Ok(Outcome::Done)
            }
            Command::CopyOut { destination } => Ok(Outcome::Copied(self.copy_out(&destination)?)),
            Command::Get { identifier } => Ok(Outcome::Line(self.get(identifier)?)),
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Append a preformatted record line under `identifier`
    ///
    /// The line is written as given; validating its fields is the caller's
    /// job. Returns the offset of the new line.
    pub fn append(&mut self, identifier: impl Into<IdentifierKey>, record_line: &str) -> Result<u64> {
        let key = identifier.into();
        if self.index.contains(key.as_str()) {
            return Err(RosterError::DuplicateIdentifier(key.into_string()));
        }

        let offset = self.file.append_line(record_line)?;
        debug!(identifier = %key, offset, "appended record");
        self.index.insert(key, offset);

        Ok(offset)
    }

    /// Validate a draft, give it the next `ID` and append it
    ///
    /// Steps:
    /// 1. Validate every field of the draft
    /// 2. Reject an identifier that is already indexed
    /// 3. Assign `next_id()`
    /// 4. Format and append
    pub fn insert(&mut self, draft: &RecordDraft) -> Result<Record> {
        let valid = draft.validate()?;

        let key = IdentifierKey::from(valid.identifier());
        if self.index.contains(key.as_str()) {
            return Err(RosterError::DuplicateIdentifier(key.into_string()));
        }

        let record = valid.into_record(self.next_id()?);
        self.append(key, &encode_record(&record))?;

        Ok(record)
    }

    /// Delete every record whose field (named case-insensitively) matches
    /// `value` case-insensitively
    ///
    /// Returns the number of records removed.
    pub fn delete_by(&mut self, field_name: &str, value: &str) -> Result<usize> {
        let field: Field = field_name.parse()?;
        self.delete_where(field, value)
    }

    /// Delete every record whose `field` matches `value` case-insensitively
    ///
    /// Survivors are streamed into `{path}.tmp`, which is then renamed over
    /// the record file. Nothing changes if an error occurs before the rename.
    pub fn delete_where(&mut self, field: Field, value: &str) -> Result<usize> {
        let by_identifier = field == Field::Identifier;

        let mut rewriter = self.file.rewriter()?;
        let mut removed = 0usize;
        let mut dropped: Vec<IdentifierKey> = Vec::new();
        let mut relocated: Vec<(IdentifierKey, u64)> = Vec::new();

        for line in self.file.lines()? {
            let line = line?;
            let text = field_at(&line.text, field, line.offset)?;

            if field_matches(text, value) {
                removed += 1;
                if by_identifier {
                    dropped.push(IdentifierKey::from(text));
                }
                continue;
            }

            let new_offset = rewriter.push_line(&line.text)?;
            if by_identifier && new_offset != line.offset {
                relocated.push((IdentifierKey::from(text), new_offset));
            }
        }

        let summary = rewriter.commit()?;

        if by_identifier {
            for key in &dropped {
                self.index.remove(key.as_str());
            }
            for (key, offset) in &relocated {
                self.index.relocate(key.as_str(), *offset);
            }
        } else {
            self.index.rebuild(self.file.lines()?)?;
        }

        info!(
            field = %field,
            value,
            removed,
            remaining = summary.lines_written,
            rebuilt = !by_identifier,
            "deleted records"
        );

        Ok(removed)
    }

    /// Truncate the file and empty the index
    pub fn clear(&mut self) -> Result<()> {
        self.file.truncate()?;
        self.index.clear();

        info!(path = %self.file.path().display(), "cleared record file");
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// One more than the largest `ID` in the file, or 1 if there is none
    ///
    /// A maximum of `u64::MAX` leaves no next `ID` and is reported as
    /// `CorruptRecord` at the line holding it.
    pub fn next_id(&self) -> Result<u64> {
        let mut max_id = 0u64;
        let mut max_offset = 0u64;

        for line in self.file.lines()? {
            let line = line?;
            let text = field_at(&line.text, Field::Id, line.offset)?;
            let id: u64 = text.parse().map_err(|_| {
                RosterError::corrupt(line.offset, format!("ID is not an integer: {:?}", text))
            })?;
            if id > max_id {
                max_id = id;
                max_offset = line.offset;
            }
        }

        max_id
            .checked_add(1)
            .ok_or_else(|| RosterError::corrupt(max_offset, "ID space exhausted"))
    }

    /// Whether a record with this identifier exists (index lookup only)
    pub fn identifier_exists(&self, identifier: impl Into<IdentifierKey>) -> bool {
        self.index.contains(identifier.into().as_str())
    }

    /// Line of the record with this identifier, read at its indexed offset
    pub fn get(&self, identifier: impl Into<IdentifierKey>) -> Result<Option<String>> {
        let key = identifier.into();
        let offset = match self.index.get(key.as_str()) {
            Some(offset) => offset,
            None => return Ok(None),
        };

        let line = self.file.read_line_at(offset)?.ok_or_else(|| {
            RosterError::corrupt(offset, format!("no line for identifier {}", key))
        })?;

        if field_at(&line.text, Field::Identifier, offset)? != key.as_str() {
            return Err(RosterError::corrupt(
                offset,
                format!("line does not belong to identifier {}", key),
            ));
        }

        Ok(Some(line.text))
    }

    /// Every record line in file order
    pub fn list_all(&self) -> Result<Vec<String>> {
        self.file
            .lines()?
            .map(|line| line.map(|line| line.text))
            .collect()
    }

    /// Every record in file order, parsed
    pub fn records(&self) -> Result<Vec<Record>> {
        self.file
            .lines()?
            .map(|line| line.and_then(|line| decode_record(&line.text, line.offset)))
            .collect()
    }

    /// Lines whose field (named case-insensitively) matches `value`
    /// case-insensitively
    pub fn search(&self, field_name: &str, value: &str) -> Result<Vec<String>> {
        let field: Field = field_name.parse()?;
        self.search_field(field, value)
    }

    /// Lines whose `field` matches `value` case-insensitively
    ///
    /// Always a linear scan, even for `Field::Identifier`.
    pub fn search_field(&self, field: Field, value: &str) -> Result<Vec<String>> {
        let mut results = Vec::new();

        for line in self.file.lines()? {
            let line = line?;
            if field_matches(field_at(&line.text, field, line.offset)?, value) {
                results.push(line.text);
            }
        }

        Ok(results)
    }

    /// Copy the record file byte for byte to `destination`
    ///
    /// Returns the number of bytes copied.
    pub fn copy_out(&self, destination: impl AsRef<Path>) -> Result<u64> {
        let destination = destination.as_ref();
        let bytes = self.file.copy_to(destination)?;

        info!(destination = %destination.display(), bytes, "copied record file");
        Ok(bytes)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Path of the bound record file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Path used for the temp file during a rewrite
    pub fn temp_path(&self) -> PathBuf {
        self.file.temp_path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Empty or populated, judged by file length
    pub fn state(&self) -> Result<StoreState> {
        if self.file.is_empty()? {
            Ok(StoreState::Empty)
        } else {
            Ok(StoreState::Populated)
        }
    }

    /// Number of indexed records
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Indexed offset of a record's line
    pub fn offset_of(&self, identifier: impl Into<IdentifierKey>) -> Option<u64> {
        self.index.get(identifier.into().as_str())
    }

    /// Every indexed identifier, sorted
    pub fn identifiers(&self) -> Vec<IdentifierKey> {
        let mut keys: Vec<IdentifierKey> = self.index.iter().map(|(key, _)| key.clone()).collect();
        keys.sort();
        keys
    }
}
