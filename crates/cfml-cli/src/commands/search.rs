//! Search command implementation.

use crate::output;
use cfml_store::SearchQuery;
use std::path::Path;

pub fn run(
    file: &Path,
    sender: Option<String>,
    receiver: Option<String>,
    text: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open(file)?;
    let query = SearchQuery {
        sender,
        receiver,
        text,
    };
    let hits = store.search_messages(&query);
    log::debug!("{} messages matched {:?}", hits.len(), query);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    output::print_hit_header();
    for hit in &hits {
        println!("{}", output::format_hit_row(hit));
    }
    Ok(())
}
