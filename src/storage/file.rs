//! Record File
//!
//! Handle for the primary record file. Holds only the path: every operation
//! opens the file, does its work and closes it again before returning.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::SyncStrategy;
use crate::error::Result;
use crate::record::LINE_TERMINATOR;

use super::{FileRewriter, Line, LineReader, TEMP_SUFFIX};

/// The record file on disk
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
    sync_strategy: SyncStrategy,
}

impl RecordFile {
    /// Open or create the record file
    ///
    /// On open:
    /// 1. Create the file empty if it doesn't exist
    /// 2. Remove a temp file left behind by an interrupted rewrite
    ///
    /// The parent directory must already exist.
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        OpenOptions::new().create(true).append(true).open(path)?;

        let file = Self {
            path: path.to_path_buf(),
            sync_strategy,
        };

        let temp_path = file.temp_path();
        match fs::remove_file(&temp_path) {
            Ok(()) => warn!(path = %temp_path.display(), "removed leftover temp file"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `{path}.tmp`
    pub fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(TEMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Current file length in bytes
    pub fn len(&self) -> Result<u64> {
        Ok(fs::metadata(&self.path)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Iterate over all lines from the start of the file
    pub fn lines(&self) -> Result<LineReader> {
        LineReader::open(&self.path)
    }

    /// Read the single line starting at `offset`
    pub fn read_line_at(&self, offset: u64) -> Result<Option<Line>> {
        LineReader::open_at(&self.path, offset)?.next().transpose()
    }

    /// Append `line` plus a terminator at the tail
    ///
    /// Returns the offset of the line's first byte, which is the file length
    /// just before the write. If the file does not end with a terminator
    /// (hand-edited files), one is written first so the new line starts on
    /// its own and the returned offset is one past the old length.
    pub fn append_line(&self, line: &str) -> Result<u64> {
        let mut file = OpenOptions::new().read(true).append(true).open(&self.path)?;
        let len = file.metadata()?.len();

        let mut bytes = Vec::with_capacity(line.len() + 2);
        let mut offset = len;
        if len > 0 && !Self::ends_with_terminator(&mut file, len)? {
            bytes.push(LINE_TERMINATOR);
            offset += 1;
        }
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(LINE_TERMINATOR);

        file.write_all(&bytes)?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_data()?;
        }

        Ok(offset)
    }

    /// Truncate the file to zero length
    pub fn truncate(&self) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }
        Ok(())
    }

    /// Copy the file byte for byte to `destination`
    ///
    /// Copying onto the file itself is a no-op. Returns the number of bytes
    /// in the destination.
    pub fn copy_to(&self, destination: &Path) -> Result<u64> {
        if destination.exists() && fs::canonicalize(destination)? == fs::canonicalize(&self.path)? {
            return self.len();
        }

        let copied = fs::copy(&self.path, destination)?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            File::open(destination)?.sync_all()?;
        }
        Ok(copied)
    }

    /// Start a rewrite of the whole file through `{path}.tmp`
    pub fn rewriter(&self) -> Result<FileRewriter> {
        FileRewriter::new(&self.path, &self.temp_path(), self.sync_strategy)
    }

    fn ends_with_terminator(file: &mut File, len: u64) -> Result<bool> {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::Start(len - 1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] == LINE_TERMINATOR)
    }
}
