//! Dates and show command implementations.

use crate::output;
use std::path::Path;

pub fn dates(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open(file)?;
    if json {
        println!("{}", serde_json::to_string(&store.list_dates())?);
    } else {
        for date in store.list_dates() {
            println!("{}", date);
        }
    }
    Ok(())
}

pub fn show(file: &Path, date: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open(file)?;
    let messages = store.list_messages(date)?;

    if json {
        println!("{}", serde_json::to_string_pretty(messages)?);
        return Ok(());
    }

    output::print_message_header();
    for (index, msg) in messages.iter().enumerate() {
        println!("{}", output::format_message_row(index, msg));
    }
    Ok(())
}
