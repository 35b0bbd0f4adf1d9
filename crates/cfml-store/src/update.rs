//! Typed partial updates for `edit_message`.

use cfml_format::{Field, FormatError, Message};
use std::str::FromStr;

/// New values for some subset of a message's fields.
///
/// Unset fields are left untouched. Build one directly, field by field, or
/// from `name=value` assignments via [`MessageUpdate::from_assignments`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageUpdate {
    /// New time.
    pub time: Option<String>,
    /// New receiver.
    pub receiver: Option<String>,
    /// New sender.
    pub sender: Option<String>,
    /// New content.
    pub content: Option<String>,
}

impl MessageUpdate {
    /// Creates an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`, replacing any earlier value for that field.
    pub fn set(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot(field) = Some(value.into());
        self
    }

    /// Parses `name=value` pairs; unknown names are rejected.
    ///
    /// A later assignment to the same field wins.
    pub fn from_assignments<I, S>(assignments: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut update = Self::new();
        for assignment in assignments {
            let assignment = assignment.as_ref();
            let (name, value) = assignment.split_once('=').unwrap_or((assignment, ""));
            update = update.set(Field::from_str(name.trim())?, value);
        }
        Ok(update)
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Iterates over the set fields in line order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    /// Returns `base` with every set field overwritten.
    pub fn apply_to(&self, base: &Message) -> Message {
        let mut merged = base.clone();
        for (field, value) in self.fields() {
            *merged.get_mut(field) = value.to_string();
        }
        merged
    }

    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Time => self.time.as_deref(),
            Field::Receiver => self.receiver.as_deref(),
            Field::Sender => self.sender.as_deref(),
            Field::Content => self.content.as_deref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Time => &mut self.time,
            Field::Receiver => &mut self.receiver,
            Field::Sender => &mut self.sender,
            Field::Content => &mut self.content,
        }
    }
}
