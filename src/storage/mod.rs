//! Storage Module
//!
//! Byte-level access to the record file.
//!
//! ## Responsibilities
//! - Stream lines together with the offset of their first byte
//! - Append one line at the tail and report where it landed
//! - Truncate, and copy the file byte for byte
//! - Rewrite the whole file through a sibling temp file
//!
//! ## Rewrite Protocol
//! ```text
//!   {path}.tmp  ◄── survivors written, flushed, closed
//!        │
//!        │ rename (commit point: atomic replace of {path})
//!        ▼
//!     {path}
//! ```
//! Until the rename, `{path}` is untouched. An abandoned rewrite removes its
//! temp file when dropped; a temp file left by a crash is removed on the
//! next open.

mod file;
mod lines;
mod rewrite;

pub use file::RecordFile;
pub use lines::{Line, LineReader};
pub use rewrite::{FileRewriter, RewriteSummary};

/// Suffix of the sibling file used while rewriting
pub const TEMP_SUFFIX: &str = ".tmp";
