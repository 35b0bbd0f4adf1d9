//! CFML parser.

use crate::errors::FormatError;
use crate::grammar::{self, Line};
use crate::record::DateBlock;

/// Parses CFML text into date blocks in file order.
///
/// Lines are trimmed and blank lines skipped. Any structural violation
/// aborts the whole parse; no partial result is returned.
///
/// # Example
///
/// ```rust
/// let text = "#$* date -* 2024-01-01 *- #$*\n\
///             @# 09:00:00 #@ $# Bob #$ *# Alice #* content -*&^# hello #^&*-\n\
///             *$# end *$#";
/// let blocks = cfml_format::load(text)?;
/// assert_eq!(blocks[0].date, "2024-01-01");
/// assert_eq!(blocks[0].messages[0].sender, "Alice");
/// # Ok::<(), cfml_format::FormatError>(())
/// ```
///
/// # Errors
///
/// Returns [`FormatError`] on nested or unterminated blocks, stray end
/// markers, orphan messages, empty captures, or unrecognized lines.
pub fn load(text: &str) -> Result<Vec<DateBlock>, FormatError> {
    let mut reader = Reader::new(text);
    let mut blocks = Vec::new();
    while let Some(block) = reader.next_block()? {
        blocks.push(block);
    }
    log::debug!(
        "parsed {} date blocks from {} lines",
        blocks.len(),
        reader.line_no()
    );
    Ok(blocks)
}

/// Incremental parser yielding one closed date block at a time.
pub struct Reader<'a> {
    lines: RawLines<'a>,
    line_no: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: RawLines { rest: text },
            line_no: 0,
        }
    }

    /// Number of raw lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Reads up to and including the next end marker.
    ///
    /// Returns `Ok(None)` once the input is exhausted with no block open.
    pub fn next_block(&mut self) -> Result<Option<DateBlock>, FormatError> {
        let mut open: Option<DateBlock> = None;

        while let Some(raw) = self.lines.next() {
            self.line_no += 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let line_no = self.line_no;

            match grammar::classify(line) {
                Line::Header { date } => {
                    if let Some(block) = open {
                        return Err(FormatError::NestedBlock {
                            line_no,
                            open_date: block.date,
                            date,
                        });
                    }
                    if date.is_empty() {
                        return Err(FormatError::MissingField {
                            line_no,
                            field: "date",
                        });
                    }
                    open = Some(DateBlock::new(date));
                }
                Line::Message(msg) => {
                    let Some(block) = open.as_mut() else {
                        return Err(FormatError::MessageOutsideBlock {
                            line_no,
                            line: line.to_string(),
                        });
                    };
                    if let Some(field) = msg.first_empty_field() {
                        return Err(FormatError::MissingField {
                            line_no,
                            field: field.as_str(),
                        });
                    }
                    block.messages.push(msg);
                }
                Line::End => {
                    let Some(block) = open.take() else {
                        return Err(FormatError::StrayEndMarker { line_no });
                    };
                    log::trace!(
                        "closed block '{}' with {} messages at line {}",
                        block.date,
                        block.messages.len(),
                        line_no
                    );
                    return Ok(Some(block));
                }
                Line::Unrecognized => {
                    return Err(FormatError::UnrecognizedLine {
                        line_no,
                        line: line.to_string(),
                    });
                }
            }
        }

        match open {
            Some(block) => Err(FormatError::UnterminatedBlock { date: block.date }),
            None => Ok(None),
        }
    }
}

/// Splits on `\r\n` and on every single-character line boundary:
/// `\n`, `\r`, vertical tab, form feed, the file/group/record separators,
/// NEL and the Unicode line and paragraph separators.
struct RawLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for RawLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(is_line_break) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let tail = &self.rest[pos..];
                let skip = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                self.rest = &self.rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e')
        || matches!(c, '\u{85}' | '\u{2028}' | '\u{2029}')
}
