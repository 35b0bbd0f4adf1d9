use crate::record::Field;
use thiserror::Error;

/// Structural errors raised while parsing CFML text.
///
/// Line numbers are 1-based and count every raw input line, blank ones
/// included, so they point at the line an editor would show.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A date header appeared before the open block was closed.
    #[error("line {line_no}: date block '{date}' opened before block '{open_date}' was closed")]
    NestedBlock {
        /// Line of the offending header.
        line_no: usize,
        /// Date of the block that is still open.
        open_date: String,
        /// Date of the header that tried to open a new block.
        date: String,
    },
    /// A message line appeared outside any date block.
    #[error("line {line_no}: message found before date header: {line}")]
    MessageOutsideBlock {
        /// Line of the orphan message.
        line_no: usize,
        /// Trimmed text of the line.
        line: String,
    },
    /// An end marker appeared with no block open.
    #[error("line {line_no}: end marker found without starting date")]
    StrayEndMarker {
        /// Line of the stray marker.
        line_no: usize,
    },
    /// A line matched none of the three line shapes.
    #[error("line {line_no}: invalid line format: {line}")]
    UnrecognizedLine {
        /// Line that failed to match.
        line_no: usize,
        /// Trimmed text of the line.
        line: String,
    },
    /// A header or message line matched but one of its captures was empty.
    #[error("line {line_no}: missing field: {field}")]
    MissingField {
        /// Line carrying the empty capture.
        line_no: usize,
        /// Name of the empty field (`date` for headers).
        field: &'static str,
    },
    /// Input ended while a block was still open.
    #[error("missing end marker for date block '{date}'")]
    UnterminatedBlock {
        /// Date of the unterminated block.
        date: String,
    },
    /// A field name outside the four message fields.
    #[error("invalid field name: {name} (expected one of {})", Field::names())]
    UnknownField {
        /// The rejected name.
        name: String,
    },
}

impl FormatError {
    /// Returns the 1-based input line the error points at, when it has one.
    pub fn line_no(&self) -> Option<usize> {
        match self {
            FormatError::NestedBlock { line_no, .. }
            | FormatError::MessageOutsideBlock { line_no, .. }
            | FormatError::StrayEndMarker { line_no }
            | FormatError::UnrecognizedLine { line_no, .. }
            | FormatError::MissingField { line_no, .. } => Some(*line_no),
            FormatError::UnterminatedBlock { .. } | FormatError::UnknownField { .. } => None,
        }
    }
}
