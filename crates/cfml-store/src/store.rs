//! The block store: an ordered list of date blocks with CRUD and search.

use crate::error::StoreError;
use crate::filter::{MessageFilter, SearchHit, SearchQuery};
use crate::update::MessageUpdate;
use cfml_format::grammar::{header_round_trips, message_round_trips};
use cfml_format::{dumps, load, DateBlock, Field, Message};

/// Ordered collection of date blocks.
///
/// Every state reachable through this API serializes to text that [`load`]
/// accepts and that parses back to the same blocks. The store has no
/// internal locking; mutation takes `&mut self`.
///
/// # Example
///
/// ```rust
/// use cfml_store::{BlockStore, SearchQuery};
///
/// let mut store = BlockStore::new();
/// store.add_message("2024-01-01", "09:00:00", "Bob", "Alice", "hello")?;
/// store.add_message("2024-01-01", "09:05:00", "Alice", "Bob", "hi")?;
///
/// let hits = store.search_messages(&SearchQuery::new().sender("Alice"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].message.content, "hello");
/// # Ok::<(), cfml_store::StoreError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStore {
    blocks: Vec<DateBlock>,
}

impl BlockStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-parsed blocks.
    ///
    /// No invariants are checked; duplicate dates passed in here stay
    /// duplicated.
    pub fn from_blocks(blocks: Vec<DateBlock>) -> Self {
        Self { blocks }
    }

    /// Parses `text` into a new store.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        Ok(Self::from_blocks(load(text)?))
    }

    /// All blocks in store order.
    pub fn blocks(&self) -> &[DateBlock] {
        &self.blocks
    }

    /// Consumes the store, returning its blocks.
    pub fn into_blocks(self) -> Vec<DateBlock> {
        self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the store holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Replaces the whole store with the blocks parsed from `text`.
    ///
    /// The replacement happens only if parsing succeeds. On error the
    /// previous content is left exactly as it was.
    pub fn load(&mut self, text: &str) -> Result<(), StoreError> {
        let blocks = load(text)?;
        log::debug!(
            "replacing {} blocks with {} parsed blocks",
            self.blocks.len(),
            blocks.len()
        );
        self.blocks = blocks;
        Ok(())
    }

    /// Renders the store as canonical CFML text.
    pub fn dumps(&self) -> String {
        dumps(&self.blocks)
    }

    /// Appends a message to the block for `date`, creating the block at the
    /// end of the store if there is none.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyField`] if any argument is empty
    /// - [`StoreError::Unrepresentable`] if a value would not parse back
    ///   (malformed time, line break, delimiter token)
    pub fn add_message(
        &mut self,
        date: &str,
        time: &str,
        receiver: &str,
        sender: &str,
        content: &str,
    ) -> Result<(), StoreError> {
        if date.is_empty() {
            return Err(StoreError::EmptyField { field: "date" });
        }
        let msg = Message::new(time, receiver, sender, content);
        if let Some(field) = msg.first_empty_field() {
            return Err(StoreError::empty(field));
        }
        check_date(date)?;
        check_message(&msg)?;

        match self.blocks.iter_mut().find(|b| b.date == date) {
            Some(block) => {
                block.messages.push(msg);
                log::debug!(
                    "appended message {} to block '{}'",
                    block.messages.len() - 1,
                    date
                );
            }
            None => {
                self.blocks.push(DateBlock {
                    date: date.to_string(),
                    messages: vec![msg],
                });
                log::debug!("created block '{}'", date);
            }
        }
        Ok(())
    }

    /// Removes every block dated `date`. Absent dates are not an error.
    ///
    /// Returns the number of blocks removed.
    pub fn delete_date(&mut self, date: &str) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.date != date);
        let removed = before - self.blocks.len();
        log::debug!("deleted {} blocks dated '{}'", removed, date);
        removed
    }

    /// Removes and returns the message at `index` in the block for `date`.
    ///
    /// Later messages shift down by one.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownDate`] if no block has that date
    /// - [`StoreError::IndexOutOfRange`] if `index` is past the end
    pub fn delete_message(&mut self, date: &str, index: usize) -> Result<Message, StoreError> {
        let block = self.block_mut(date)?;
        check_index(block, index)?;
        let removed = block.messages.remove(index);
        log::debug!("deleted message {} from block '{}'", index, date);
        Ok(removed)
    }

    /// Overwrites the fields set in `update` on one message.
    ///
    /// All values are validated before anything is written, so a failed
    /// edit leaves the message unchanged. An empty update is a no-op.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownDate`] / [`StoreError::IndexOutOfRange`] when
    ///   the message cannot be located
    /// - [`StoreError::EmptyField`] if a supplied value is empty
    /// - [`StoreError::Unrepresentable`] if the edited message would not
    ///   parse back
    pub fn edit_message(
        &mut self,
        date: &str,
        index: usize,
        update: &MessageUpdate,
    ) -> Result<(), StoreError> {
        let block = self.block_mut(date)?;
        check_index(block, index)?;

        if let Some((field, _)) = update.fields().find(|(_, v)| v.is_empty()) {
            return Err(StoreError::empty(field));
        }
        let edited = update.apply_to(&block.messages[index]);
        check_message(&edited)?;

        block.messages[index] = edited;
        log::debug!("edited message {} in block '{}'", index, date);
        Ok(())
    }

    /// Dates of all blocks in store order.
    pub fn list_dates(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.date.as_str()).collect()
    }

    /// Messages of the block for `date`.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownDate`] if no block has that date.
    pub fn list_messages(&self, date: &str) -> Result<&[Message], StoreError> {
        self.blocks
            .iter()
            .find(|b| b.date == date)
            .map(|b| b.messages.as_slice())
            .ok_or_else(|| unknown_date(date))
    }

    /// Finds messages matching every criterion set in `query`.
    ///
    /// Results are in block-then-message order. No match yields an empty
    /// vector.
    pub fn search_messages(&self, query: &SearchQuery) -> Vec<SearchHit> {
        self.filter_messages(&query.to_filter())
    }

    /// Finds messages accepted by an arbitrary filter.
    pub fn filter_messages<F: MessageFilter + ?Sized>(&self, filter: &F) -> Vec<SearchHit> {
        self.blocks
            .iter()
            .flat_map(move |block| {
                block
                    .messages
                    .iter()
                    .enumerate()
                    .filter(move |(_, msg)| filter.matches(msg))
                    .map(move |(index, msg)| SearchHit {
                        date: block.date.clone(),
                        index,
                        message: msg.clone(),
                    })
            })
            .collect()
    }

    fn block_mut(&mut self, date: &str) -> Result<&mut DateBlock, StoreError> {
        self.blocks
            .iter_mut()
            .find(|b| b.date == date)
            .ok_or_else(|| unknown_date(date))
    }
}

fn unknown_date(date: &str) -> StoreError {
    StoreError::UnknownDate {
        date: date.to_string(),
    }
}

fn check_index(block: &DateBlock, index: usize) -> Result<(), StoreError> {
    if index >= block.messages.len() {
        return Err(StoreError::IndexOutOfRange {
            date: block.date.clone(),
            index,
            len: block.messages.len(),
        });
    }
    Ok(())
}

fn check_date(date: &str) -> Result<(), StoreError> {
    if !header_round_trips(date) {
        return Err(StoreError::Unrepresentable {
            field: "date",
            value: date.to_string(),
        });
    }
    Ok(())
}

fn check_message(msg: &Message) -> Result<(), StoreError> {
    if message_round_trips(msg) {
        return Ok(());
    }
    // Blame the first field that fails on its own against a known-good line.
    let field = Field::ALL
        .into_iter()
        .find(|f| {
            let mut single = Message::new("00:00:00", "r", "s", "c");
            *single.get_mut(*f) = msg.get(*f).to_string();
            !message_round_trips(&single)
        })
        .unwrap_or(Field::Content);
    Err(StoreError::Unrepresentable {
        field: field.as_str(),
        value: msg.get(field).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> BlockStore {
        let mut store = BlockStore::new();
        store
            .add_message("2024-01-01", "09:00:00", "Bob", "Alice", "hello")
            .unwrap();
        store
            .add_message("2024-01-01", "09:01:00", "Alice", "Bob", "hi Alice")
            .unwrap();
        store
            .add_message("2024-01-02", "10:00:00", "Carol", "Alice", "lunch?")
            .unwrap();
        store
    }

    #[test]
    fn add_merges_into_existing_date() {
        let store = store();
        assert_eq!(store.list_dates(), vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(store.list_messages("2024-01-01").unwrap().len(), 2);
    }

    #[test]
    fn add_rejects_empty_argument() {
        let mut store = store();
        let err = store
            .add_message("2024-01-03", "09:00:00", "Bob", "", "x")
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "sender" }));
        let err = store
            .add_message("", "09:00:00", "Bob", "Alice", "x")
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "date" }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_rejects_unparseable_values() {
        let mut store = BlockStore::new();
        let err = store.add_message("d", "9am", "Bob", "Alice", "x").unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable { field: "time", .. }));
        let err = store
            .add_message("d", "09:00:00", "Bob", "Alice", "two\nlines")
            .unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable { field: "content", .. }));
        let err = store
            .add_message("a\nb", "09:00:00", "Bob", "Alice", "x")
            .unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable { field: "date", .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_bare_carriage_return() {
        let mut store = store();
        let err = store
            .add_message("2024-01-01", "09:00:00", "Bob", "Alice", "a\rb")
            .unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable { field: "content", .. }));
        let err = store
            .add_message("x\ry", "09:00:00", "Bob", "Alice", "hi")
            .unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable { field: "date", .. }));
        assert_eq!(store, self::store());
        assert_eq!(BlockStore::parse(&store.dumps()).unwrap(), store);
    }

    #[test]
    fn add_rejects_unicode_line_boundaries() {
        let mut store = BlockStore::new();
        for value in ["a\u{2028}b", "a\u{85}b", "a\x0cb", "a\x1eb"] {
            let err = store
                .add_message("d", "09:00:00", value, "Alice", "hi")
                .unwrap_err();
            assert!(matches!(err, StoreError::Unrepresentable { field: "receiver", .. }));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn edit_rejects_bare_carriage_return() {
        let mut store = store();
        let update = MessageUpdate::new().set(Field::Sender, "Al\rice");
        let err = store.edit_message("2024-01-01", 0, &update).unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable { field: "sender", .. }));
        assert_eq!(store, self::store());
        assert_eq!(BlockStore::parse(&store.dumps()).unwrap(), store);
    }

    #[test]
    fn delete_date_is_noop_when_absent() {
        let mut store = store();
        assert_eq!(store.delete_date("1999-01-01"), 0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.delete_date("2024-01-01"), 1);
        assert_eq!(store.list_dates(), vec!["2024-01-02"]);
    }

    #[test]
    fn delete_date_removes_duplicates() {
        let mut store = BlockStore::from_blocks(vec![
            DateBlock::new("d"),
            DateBlock::new("e"),
            DateBlock::new("d"),
        ]);
        assert_eq!(store.delete_date("d"), 2);
        assert_eq!(store.list_dates(), vec!["e"]);
    }

    #[test]
    fn delete_message_shifts_indices() {
        let mut store = store();
        let removed = store.delete_message("2024-01-01", 0).unwrap();
        assert_eq!(removed.content, "hello");
        let remaining = store.list_messages("2024-01-01").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].content, "hi Alice");
    }

    #[test]
    fn delete_message_can_empty_a_block() {
        let mut store = store();
        store.delete_message("2024-01-02", 0).unwrap();
        assert!(store.list_messages("2024-01-02").unwrap().is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_message_errors() {
        let mut store = store();
        assert!(matches!(
            store.delete_message("nope", 0).unwrap_err(),
            StoreError::UnknownDate { .. }
        ));
        match store.delete_message("2024-01-01", 2).unwrap_err() {
            StoreError::IndexOutOfRange { index, len, .. } => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("Expected IndexOutOfRange, got {:?}", other),
        }
        assert_eq!(store, self::store());
    }

    #[test]
    fn edit_overwrites_set_fields() {
        let mut store = store();
        let update = MessageUpdate::new()
            .set(Field::Content, "hello again")
            .set(Field::Time, "09:00:30");
        store.edit_message("2024-01-01", 0, &update).unwrap();
        let msg = &store.list_messages("2024-01-01").unwrap()[0];
        assert_eq!(msg, &Message::new("09:00:30", "Bob", "Alice", "hello again"));
    }

    #[test]
    fn edit_is_all_or_nothing() {
        let mut store = store();
        let update = MessageUpdate::new()
            .set(Field::Receiver, "Dan")
            .set(Field::Content, "");
        let err = store.edit_message("2024-01-01", 0, &update).unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "content" }));
        assert_eq!(store, self::store());

        let update = MessageUpdate::new()
            .set(Field::Receiver, "Dan")
            .set(Field::Time, "noon");
        let err = store.edit_message("2024-01-01", 0, &update).unwrap_err();
        assert!(matches!(err, StoreError::Unrepresentable { field: "time", .. }));
        assert_eq!(store, self::store());
    }

    #[test]
    fn empty_edit_is_noop() {
        let mut store = store();
        store
            .edit_message("2024-01-01", 1, &MessageUpdate::new())
            .unwrap();
        assert_eq!(store, self::store());
    }

    #[test]
    fn edit_locates_message_first() {
        let mut store = store();
        let update = MessageUpdate::new().set(Field::Content, "x");
        assert!(matches!(
            store.edit_message("nope", 0, &update).unwrap_err(),
            StoreError::UnknownDate { .. }
        ));
        assert!(matches!(
            store.edit_message("2024-01-02", 1, &update).unwrap_err(),
            StoreError::IndexOutOfRange { .. }
        ));
    }

    #[test]
    fn list_messages_unknown_date() {
        assert!(matches!(
            store().list_messages("2030-01-01").unwrap_err(),
            StoreError::UnknownDate { .. }
        ));
    }

    #[test]
    fn search_annotates_date_and_index() {
        let hits = store().search_messages(&SearchQuery::new().sender("Alice"));
        let found: Vec<(&str, usize, &str)> = hits
            .iter()
            .map(|h| (h.date.as_str(), h.index, h.message.content.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![("2024-01-01", 0, "hello"), ("2024-01-02", 0, "lunch?")]
        );
    }

    #[test]
    fn search_without_matches_is_empty() {
        assert!(store()
            .search_messages(&SearchQuery::new().receiver("Zed"))
            .is_empty());
    }

    #[test]
    fn failed_load_keeps_previous_content() {
        let mut store = store();
        let err = store.load("#$* date -* x *- #$*").unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));
        assert_eq!(store, self::store());
    }

    #[test]
    fn load_replaces_content() {
        let mut store = store();
        store.load("").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.dumps(), "");
    }
}
