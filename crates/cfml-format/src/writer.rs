//! CFML serializer.

use crate::grammar::{render_header, render_message, END_MARKER};
use crate::record::DateBlock;

/// Renders blocks to canonical CFML text.
///
/// Lines are joined with `\n` and there is no trailing newline. An empty
/// slice renders to the empty string.
///
/// # Example
///
/// ```rust
/// use cfml_format::{dumps, DateBlock, Message};
///
/// let mut block = DateBlock::new("2024-01-01");
/// block.messages.push(Message::new("09:00:00", "Bob", "Alice", "hello"));
///
/// assert_eq!(
///     dumps(&[block]),
///     "#$* date -* 2024-01-01 *- #$*\n\
///      @# 09:00:00 #@ $# Bob #$ *# Alice #* content -*&^# hello #^&*-\n\
///      *$# end *$#"
/// );
/// ```
pub fn dumps(blocks: &[DateBlock]) -> String {
    let mut writer = Writer::new();
    for block in blocks {
        writer.push_block(block);
    }
    writer.finish()
}

/// Accumulates rendered blocks.
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one block: header, messages, end marker.
    pub fn push_block(&mut self, block: &DateBlock) {
        self.push_line(&render_header(&block.date));
        for msg in &block.messages {
            self.push_line(&render_message(msg));
        }
        self.push_line(END_MARKER);
    }

    fn push_line(&mut self, line: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.push_str(line);
    }

    /// Returns the rendered text.
    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load;
    use crate::record::Message;

    #[test]
    fn empty_store_renders_empty_text() {
        assert_eq!(dumps(&[]), "");
    }

    #[test]
    fn block_without_messages() {
        assert_eq!(
            dumps(&[DateBlock::new("d")]),
            "#$* date -* d *- #$*\n*$# end *$#"
        );
    }

    #[test]
    fn no_trailing_newline_between_or_after_blocks() {
        let text = dumps(&[DateBlock::new("a"), DateBlock::new("b")]);
        assert_eq!(
            text,
            "#$* date -* a *- #$*\n*$# end *$#\n#$* date -* b *- #$*\n*$# end *$#"
        );
    }

    #[test]
    fn normalizes_input_whitespace() {
        let text = "  #$* date -* d *-\t#$*\n\n@# 01:02:03 #@ $# r #$ *# s #* content -*&^# c #^&*-   \n*$# end *$#\n";
        let canonical = dumps(&load(text).unwrap());
        assert_eq!(
            canonical,
            "#$* date -* d *- #$*\n@# 01:02:03 #@ $# r #$ *# s #* content -*&^# c #^&*-\n*$# end *$#"
        );
    }

    #[test]
    fn preserves_block_and_message_order() {
        let mut a = DateBlock::new("z");
        a.messages.push(Message::new("10:00:00", "r", "s", "second"));
        a.messages.push(Message::new("09:00:00", "r", "s", "first"));
        let b = DateBlock::new("a");
        let blocks = vec![a, b];
        assert_eq!(load(&dumps(&blocks)).unwrap(), blocks);
    }
}
