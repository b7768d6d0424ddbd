//! Error types for RosterDB
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

use crate::record::ValidationError;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for RosterDB operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Record with identifier {0} already exists")]
    DuplicateIdentifier(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Corrupt record at offset {offset}: {reason}")]
    CorruptRecord { offset: u64, reason: String },

    // -------------------------------------------------------------------------
    // Boundary Errors
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// Build a `CorruptRecord` error for the line starting at `offset`
    pub(crate) fn corrupt(offset: u64, reason: impl Into<String>) -> Self {
        RosterError::CorruptRecord {
            offset,
            reason: reason.into(),
        }
    }
}
