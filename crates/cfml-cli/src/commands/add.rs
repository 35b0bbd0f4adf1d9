//! Add command implementation.

use cfml_store::BlockStore;
use std::path::Path;

pub fn run(
    file: &Path,
    date: &str,
    time: &str,
    receiver: &str,
    sender: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // A missing file starts a new log.
    let mut store = BlockStore::open_or_default(file)
        .map_err(|e| format!("Failed to load {}: {}", file.display(), e))?;
    store.add_message(date, time, receiver, sender, content)?;
    super::save(&store, file)?;

    let index = store.list_messages(date)?.len() - 1;
    println!("Added message {} to {}", index, date);
    Ok(())
}
