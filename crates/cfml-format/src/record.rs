use crate::errors::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One timestamped message inside a date block.
///
/// All four fields are mandatory and non-empty. A message has no identity
/// beyond its current position in the owning block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Time of day, `HH:MM:SS`.
    pub time: String,
    /// Receiving party.
    pub receiver: String,
    /// Sending party.
    pub sender: String,
    /// Free-text body.
    pub content: String,
}

impl Message {
    /// Creates a message from its four fields without validation.
    pub fn new(
        time: impl Into<String>,
        receiver: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            receiver: receiver.into(),
            sender: sender.into(),
            content: content.into(),
        }
    }

    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Time => &self.time,
            Field::Receiver => &self.receiver,
            Field::Sender => &self.sender,
            Field::Content => &self.content,
        }
    }

    /// Returns a mutable handle to the value of `field`.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Time => &mut self.time,
            Field::Receiver => &mut self.receiver,
            Field::Sender => &mut self.sender,
            Field::Content => &mut self.content,
        }
    }

    /// Returns the first field, in line order, whose value is empty.
    pub fn first_empty_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }
}

/// A named group of messages bounded by a date header and an end marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBlock {
    /// Opaque, non-empty date label.
    pub date: String,
    /// Messages in insertion order.
    pub messages: Vec<Message>,
}

impl DateBlock {
    /// Creates an empty block for `date`.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            messages: Vec::new(),
        }
    }
}

/// The four message fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// `time`
    Time,
    /// `receiver`
    Receiver,
    /// `sender`
    Sender,
    /// `content`
    Content,
}

impl Field {
    /// All fields in the order they appear on a message line.
    pub const ALL: [Field; 4] = [Field::Time, Field::Receiver, Field::Sender, Field::Content];

    /// Lowercase field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::Receiver => "receiver",
            Field::Sender => "sender",
            Field::Content => "content",
        }
    }

    pub(crate) fn names() -> &'static str {
        "time, receiver, sender, content"
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Field::Time),
            "receiver" => Ok(Field::Receiver),
            "sender" => Ok(Field::Sender),
            "content" => Ok(Field::Content),
            other => Err(FormatError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}
