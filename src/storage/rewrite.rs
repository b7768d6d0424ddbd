//! File Rewriter
//!
//! Writes a replacement for the record file into `{path}.tmp`, then renames
//! it over `{path}`.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::Result;
use crate::record::LINE_TERMINATOR;

/// Result of a committed rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Number of lines in the new file
    pub lines_written: u64,
    /// Size of the new file in bytes
    pub bytes_written: u64,
}

/// Builder for a replacement record file
///
/// Call `push_line()` for each surviving line in order, then `commit()`.
/// Dropping the rewriter without committing removes the temp file and
/// leaves the original untouched.
pub struct FileRewriter {
    /// File being replaced
    target: PathBuf,
    /// Sibling temp file receiving the new content
    temp_path: PathBuf,
    /// Buffered writer for performance (None once committed)
    writer: Option<BufWriter<File>>,
    /// Current write position (offset of the next line)
    current_offset: u64,
    /// Number of lines written
    line_count: u64,
    sync_strategy: SyncStrategy,
    committed: bool,
}

impl FileRewriter {
    /// Create the temp file, replacing any previous one
    pub fn new(target: &Path, temp_path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(temp_path)?;

        Ok(Self {
            target: target.to_path_buf(),
            temp_path: temp_path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            current_offset: 0,
            line_count: 0,
            sync_strategy,
            committed: false,
        })
    }

    /// Write one line plus terminator
    ///
    /// Returns the offset the line will have in the new file.
    pub fn push_line(&mut self, line: &str) -> Result<u64> {
        let offset = self.current_offset;

        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(line.as_bytes())?;
            writer.write_all(&[LINE_TERMINATOR])?;
        }

        self.current_offset += line.len() as u64 + 1;
        self.line_count += 1;

        Ok(offset)
    }

    /// Offset the next pushed line will get
    pub fn current_offset(&self) -> u64 {
        self.current_offset
    }

    /// Flush and close the temp file, then rename it over the target
    ///
    /// The rename is the commit point: before it the original file is
    /// intact, after it the new content is visible.
    pub fn commit(mut self) -> Result<RewriteSummary> {
        if let Some(writer) = self.writer.take() {
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            if self.sync_strategy == SyncStrategy::EveryWrite {
                file.sync_all()?;
            }
        }

        fs::rename(&self.temp_path, &self.target)?;
        self.committed = true;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            sync_parent_dir(&self.target)?;
        }

        Ok(RewriteSummary {
            lines_written: self.line_count,
            bytes_written: self.current_offset,
        })
    }

    /// Give up on the rewrite and remove the temp file
    pub fn abort(self) {
        drop(self);
    }
}

impl Drop for FileRewriter {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Close the handle before removing the file
        self.writer.take();
        let _ = fs::remove_file(&self.temp_path);
    }
}

/// Make the rename itself durable
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> Result<()> {
    Ok(())
}
