//! Output formatting utilities.

use cfml_store::{Message, SearchHit};

/// Formats a message as a table row prefixed with its index.
pub fn format_message_row(index: usize, msg: &Message) -> String {
    format!(
        "{:<6} {:<9} {:<16} {:<16} {}",
        index,
        msg.time,
        truncate(&msg.sender, 16),
        truncate(&msg.receiver, 16),
        msg.content
    )
}

/// Formats a search hit as a table row.
pub fn format_hit_row(hit: &SearchHit) -> String {
    format!(
        "{:<12} {}",
        truncate(&hit.date, 12),
        format_message_row(hit.index, &hit.message)
    )
}

/// Prints the message table header.
#[allow(clippy::print_literal)]
pub fn print_message_header() {
    println!(
        "{:<6} {:<9} {:<16} {:<16} {}",
        "INDEX", "TIME", "SENDER", "RECEIVER", "CONTENT"
    );
    println!("{}", "-".repeat(72));
}

/// Prints the search table header.
#[allow(clippy::print_literal)]
pub fn print_hit_header() {
    println!(
        "{:<12} {:<6} {:<9} {:<16} {:<16} {}",
        "DATE", "INDEX", "TIME", "SENDER", "RECEIVER", "CONTENT"
    );
    println!("{}", "-".repeat(85));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
