//! Line grammar: matchers for the three line shapes and their renderers.
//!
//! Header and message captures are non-greedy and may be empty; empty
//! captures are rejected by the reader, not by the matchers, so the error
//! can name the missing field.

use crate::reader::load;
use crate::record::{DateBlock, Message};
use crate::writer::dumps;
use once_cell::sync::Lazy;
use regex::Regex;

/// Exact end-of-block marker line.
pub const END_MARKER: &str = "*$# end *$#";

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#\$\* date -\* (?P<date>.*?) \*-\s#\$\*$").expect("invalid header regex")
});

static MESSAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^@# (?P<time>[0-9]{2}:[0-9]{2}:[0-9]{2}) #@ ",
        r"\$# (?P<receiver>.*?) #\$ ",
        r"\*# (?P<sender>.*?) #\* ",
        r"content -\*&\^# (?P<content>.*?) #\^&\*-$",
    ))
    .expect("invalid message regex")
});

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}$").expect("invalid time regex"));

/// Classification of a single trimmed, non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `#$* date -* <date> *- #$*`
    Header {
        /// Captured date, possibly empty.
        date: String,
    },
    /// `@# <time> #@ $# <receiver> #$ *# <sender> #* content -*&^# <content> #^&*-`
    Message(Message),
    /// `*$# end *$#`
    End,
    /// None of the above.
    Unrecognized,
}

/// Classifies a trimmed line.
///
/// Shapes are tried header first, then message, then end marker.
pub fn classify(line: &str) -> Line {
    if let Some(caps) = HEADER_RE.captures(line) {
        return Line::Header {
            date: caps["date"].to_string(),
        };
    }

    if let Some(caps) = MESSAGE_RE.captures(line) {
        return Line::Message(Message::new(
            &caps["time"],
            &caps["receiver"],
            &caps["sender"],
            &caps["content"],
        ));
    }

    if line == END_MARKER {
        return Line::End;
    }

    Line::Unrecognized
}

/// Renders the canonical date header line.
pub fn render_header(date: &str) -> String {
    format!("#$* date -* {} *- #$*", date)
}

/// Renders the canonical message line.
pub fn render_message(msg: &Message) -> String {
    format!(
        "@# {} #@ $# {} #$ *# {} #* content -*&^# {} #^&*-",
        msg.time, msg.receiver, msg.sender, msg.content
    )
}

/// Returns true if `time` has the `HH:MM:SS` shape.
pub fn is_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// Returns true if a block header for `date` parses back to the same date.
///
/// The check runs the rendered block through the reader, so line splitting
/// and trimming apply exactly as they do on load.
pub fn header_round_trips(date: &str) -> bool {
    if date.is_empty() {
        return false;
    }
    let block = DateBlock::new(date);
    match load(&dumps(std::slice::from_ref(&block))) {
        Ok(parsed) => parsed.len() == 1 && parsed[0] == block,
        Err(_) => false,
    }
}

/// Returns true if `msg` renders to a line that parses back to `msg`.
///
/// Fails for empty fields, a malformed time, line breaks, and values that
/// contain a delimiter token which would move a field boundary on re-parse.
pub fn message_round_trips(msg: &Message) -> bool {
    if msg.first_empty_field().is_some() {
        return false;
    }
    let text = format!(
        "{}\n{}\n{}",
        render_header("d"),
        render_message(msg),
        END_MARKER
    );
    match load(&text) {
        Ok(blocks) => {
            blocks.len() == 1 && blocks[0].messages.as_slice() == std::slice::from_ref(msg)
        }
        Err(_) => false,
    }
}
