//! Delete command implementation.

use std::path::Path;

pub fn run(
    file: &Path,
    date: &str,
    index: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = super::open(file)?;

    match index {
        Some(index) => {
            let removed = store.delete_message(date, index)?;
            println!(
                "Deleted message {} from {} ({} -> {})",
                index, date, removed.sender, removed.receiver
            );
        }
        None => {
            let removed = store.delete_date(date);
            if removed == 0 {
                println!("No date block {}", date);
                return Ok(());
            }
            println!("Deleted date {}", date);
        }
    }

    super::save(&store, file)
}
