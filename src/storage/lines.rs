//! Line Reader
//!
//! Sequential iteration over record lines, tracking byte offsets.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::record::LINE_TERMINATOR;

/// One line of the record file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Position of the line's first byte
    pub offset: u64,
    /// Line content without its terminator
    pub text: String,
}

/// Iterator over the lines of a record file in file order
///
/// Accepts `\n` and `\r\n` terminators and a missing terminator on the last
/// line. Empty lines are skipped. Iteration stops after the first error.
pub struct LineReader {
    reader: BufReader<File>,
    /// Offset of the next unread byte
    position: u64,
    buf: Vec<u8>,
    failed: bool,
}

impl LineReader {
    /// Read from the start of the file
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_at(path, 0)
    }

    /// Read starting at `offset`, which must be the start of a line
    pub fn open_at(path: &Path, offset: u64) -> Result<Self> {
        let mut file = File::open(path)?;
        if offset > 0 {
            file.seek(SeekFrom::Start(offset))?;
        }
        Ok(Self {
            reader: BufReader::new(file),
            position: offset,
            buf: Vec::new(),
            failed: false,
        })
    }

    /// Offset of the next line to be returned
    pub fn position(&self) -> u64 {
        self.position
    }

    fn read_line(&mut self) -> Result<Option<Line>> {
        loop {
            self.buf.clear();
            let offset = self.position;
            let consumed = self.reader.read_until(LINE_TERMINATOR, &mut self.buf)?;
            if consumed == 0 {
                return Ok(None);
            }
            self.position += consumed as u64;

            if self.buf.last() == Some(&LINE_TERMINATOR) {
                self.buf.pop();
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
            }
            if self.buf.is_empty() {
                continue;
            }

            let text = String::from_utf8(std::mem::take(&mut self.buf))
                .map_err(|_| RosterError::corrupt(offset, "line is not valid UTF-8"))?;
            return Ok(Some(Line { offset, text }));
        }
    }
}

impl Iterator for LineReader {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_line() {
            Ok(line) => line.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
