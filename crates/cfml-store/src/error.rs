//! Error types for store operations.

use cfml_format::{Field, FormatError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Text failed to parse.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    /// A required value was empty.
    #[error("missing required field: {field}")]
    EmptyField {
        /// Name of the empty field (`date` or a message field).
        field: &'static str,
    },
    /// A value would not survive serialization and re-parsing.
    #[error("{field} value cannot be written as CFML: {value:?}")]
    Unrepresentable {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// No block carries the requested date.
    #[error("no such date block: {date}")]
    UnknownDate {
        /// Requested date.
        date: String,
    },
    /// Message index outside the block.
    #[error("invalid message index {index} for date '{date}' ({len} messages)")]
    IndexOutOfRange {
        /// Date of the block.
        date: String,
        /// Requested index.
        index: usize,
        /// Number of messages in the block.
        len: usize,
    },
    /// I/O failure in a file collaborator.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying cause.
        source: std::io::Error,
    },
}

/// Coarse classification of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Grammar or invariant violation.
    Structural,
    /// External I/O failure.
    Io,
}

impl StoreError {
    /// Returns whether this is a structural or an I/O failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Io { .. } => ErrorKind::Io,
            _ => ErrorKind::Structural,
        }
    }

    pub(crate) fn empty(field: Field) -> Self {
        StoreError::EmptyField {
            field: field.as_str(),
        }
    }
}
