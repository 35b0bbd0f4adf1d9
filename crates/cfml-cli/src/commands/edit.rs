//! Edit command implementation.

use cfml_store::MessageUpdate;
use std::path::Path;

pub fn run(
    file: &Path,
    date: &str,
    index: usize,
    assignments: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let update = MessageUpdate::from_assignments(assignments)?;
    let mut store = super::open(file)?;
    store.edit_message(date, index, &update)?;
    super::save(&store, file)?;

    let fields: Vec<&str> = update.fields().map(|(f, _)| f.as_str()).collect();
    println!("Updated {} on message {} of {}", fields.join(", "), index, date);
    Ok(())
}
