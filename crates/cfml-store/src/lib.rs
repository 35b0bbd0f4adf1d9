//! In-memory block store for CFML message logs.
//!
//! This crate provides:
//! - [`BlockStore`], an ordered list of date blocks with add/delete/edit
//! - Search over all messages via [`SearchQuery`] or any [`MessageFilter`]
//! - Typed partial updates ([`MessageUpdate`]) for editing messages
//! - File collaborators ([`BlockStore::open`], [`BlockStore::save`])
//!
//! Every mutation is single-call atomic: it either succeeds completely or
//! returns an error with the store untouched. [`BlockStore::load`] replaces
//! the content only when the new text parses.

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// File collaborators.
pub mod file;
/// Message filtering API.
pub mod filter;
/// The block store.
pub mod store;
/// Typed partial updates.
pub mod update;

pub use cfml_format::{DateBlock, Field, FormatError, Message};
pub use error::{ErrorKind, StoreError};
pub use file::SaveOptions;
pub use filter::{
    AndFilter, ContentFilter, MessageFilter, ReceiverFilter, SearchHit, SearchQuery, SenderFilter,
};
pub use store::BlockStore;
pub use update::MessageUpdate;
