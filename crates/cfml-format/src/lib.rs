//! Line grammar, parser and serializer for the CFML dated message format.
//!
//! This crate provides:
//! - The record shapes ([`DateBlock`], [`Message`], [`Field`])
//! - Matchers and renderers for the three line shapes
//! - [`load`] and [`dumps`], the text <-> block transform
//!
//! ## Format
//!
//! ```text
//! #$* date -* 2024-01-01 *- #$*
//! @# 09:00:00 #@ $# Bob #$ *# Alice #* content -*&^# hello #^&*-
//! *$# end *$#
//! ```
//!
//! A file is a sequence of date blocks. Each block opens with a date header,
//! holds zero or more message lines and closes with the end marker. Blocks do
//! not nest. Blank lines and surrounding whitespace are ignored on input and
//! never produced on output.
//!
//! ## Quick Start
//!
//! ```rust
//! use cfml_format::{dumps, load};
//!
//! let text = "#$* date -* 2024-01-01 *- #$*\n\
//!             @# 09:00:00 #@ $# Bob #$ *# Alice #* content -*&^# hello #^&*-\n\
//!             *$# end *$#";
//!
//! let blocks = load(text)?;
//! assert_eq!(dumps(&blocks), text);
//! # Ok::<(), cfml_format::FormatError>(())
//! ```

#![deny(missing_docs)]

/// Error types for parsing.
pub mod errors;
/// Line matchers and renderers.
pub mod grammar;
/// Parser.
pub mod reader;
/// Record shapes shared with the store.
pub mod record;
/// Serializer.
pub mod writer;

pub use errors::FormatError;
pub use grammar::{classify, Line, END_MARKER};
pub use reader::{load, Reader};
pub use record::{DateBlock, Field, Message};
pub use writer::{dumps, Writer};
