//! Subcommand implementations.

pub mod add;
pub mod check;
pub mod delete;
pub mod edit;
pub mod fmt;
pub mod list;
pub mod search;

use cfml_store::{BlockStore, SaveOptions};
use std::path::Path;

/// Opens the store, prefixing errors with the file path.
pub(crate) fn open(file: &Path) -> Result<BlockStore, Box<dyn std::error::Error>> {
    BlockStore::open(file).map_err(|e| format!("Failed to load {}: {}", file.display(), e).into())
}

/// Saves the store with default options.
pub(crate) fn save(store: &BlockStore, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    store.save(file, &SaveOptions::default())?;
    Ok(())
}
