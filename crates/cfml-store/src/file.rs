//! File collaborators: read and write a store as a UTF-8 CFML file.
//!
//! Text passes through unchanged. I/O failures surface as
//! [`StoreError::Io`]; parse failures keep their structural kind.

use crate::error::StoreError;
use crate::store::BlockStore;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Options for saving a store.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Whether to create the file if it doesn't exist (default: true).
    pub create: bool,
    /// Whether to fsync after writing (default: false).
    pub sync: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            create: true,
            sync: false,
        }
    }
}

impl BlockStore {
    /// Reads and parses a CFML file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cfml_store::BlockStore;
    ///
    /// let store = BlockStore::open("chat.cfml")?;
    /// for date in store.list_dates() {
    ///     println!("{}", date);
    /// }
    /// # Ok::<(), cfml_store::StoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] if the file cannot be read or is not UTF-8
    /// - [`StoreError::Format`] if the text does not parse
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", text.len(), path.display());
        Self::parse(&text)
    }

    /// Like [`BlockStore::open`], but a missing file yields an empty store.
    pub fn open_or_default<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        match Self::open(&path) {
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "{} does not exist, starting empty",
                    path.as_ref().display()
                );
                Ok(Self::new())
            }
            other => other,
        }
    }

    /// Writes the canonical text of the store to `path`, replacing its
    /// contents.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the file cannot be opened or written.
    pub fn save<P: AsRef<Path>>(&self, path: P, options: &SaveOptions) -> Result<(), StoreError> {
        let path = path.as_ref();
        let text = self.dumps();
        write_text(path, &text, options).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("wrote {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}

fn write_text(path: &Path, text: &str, options: &SaveOptions) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(options.create)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    if options.sync {
        file.sync_all()?;
    }
    Ok(())
}
