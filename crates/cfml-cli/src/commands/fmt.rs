//! Fmt command implementation.

use std::path::Path;

pub fn run(file: &Path, write: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open(file)?;
    if write {
        super::save(&store, file)?;
        log::info!("rewrote {} in canonical form", file.display());
    } else {
        println!("{}", store.dumps());
    }
    Ok(())
}
