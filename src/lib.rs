//! # RosterDB
//!
//! A single-file record store with:
//! - One comma-separated text line per record, append-oriented
//! - An in-memory index from identifier to byte offset
//! - Atomic whole-file rewrite (temp file + rename) on delete
//! - A small command protocol and a shell driver
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Driver (CLI / shell / caller)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Command / direct calls
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                          Store                               │
//! │        (append, search, delete_by, clear, copy_out, ...)     │
//! └──────────┬──────────────────┬───────────────────┬───────────┘
//!            │                  │                   │
//!            ▼                  ▼                   ▼
//!   ┌─────────────────┐ ┌───────────────┐ ┌──────────────────────┐
//!   │     Record      │ │  OffsetIndex  │ │      RecordFile      │
//!   │ (codec, fields) │ │ (id → offset) │ │ (lines, tmp+rename)  │
//!   └─────────────────┘ └───────────────┘ └──────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use rosterdb::{RecordDraft, Store};
//!
//! let mut store = Store::open_path("database.txt")?;
//! store.insert(&RecordDraft::new("42", "Alice", "30", "01.01.1990"))?;
//! assert!(store.identifier_exists(42u64));
//! for line in store.search("name", "alice")? {
//!     println!("{}", line);
//! }
//! # Ok::<(), rosterdb::RosterError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod index;
pub mod storage;
pub mod protocol;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::{Config, SyncStrategy};
pub use index::IdentifierKey;
pub use record::{Field, Record, RecordDraft, ValidationError};
pub use store::{Store, StoreState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RosterDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
