//! Check command implementation.

use std::path::Path;

pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open(file)?;
    let messages: usize = store.blocks().iter().map(|b| b.messages.len()).sum();
    println!("OK: {} date blocks, {} messages", store.len(), messages);
    Ok(())
}
