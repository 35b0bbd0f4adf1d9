//! Message filtering for search.

use cfml_format::Message;
use serde::Serialize;

/// Trait for filtering messages during search.
pub trait MessageFilter {
    /// Returns true if the message matches the filter criteria.
    fn matches(&self, msg: &Message) -> bool;
}

/// Exact match on sender.
#[derive(Debug, Clone)]
pub struct SenderFilter {
    /// Sender to match.
    pub sender: String,
}

impl MessageFilter for SenderFilter {
    fn matches(&self, msg: &Message) -> bool {
        msg.sender == self.sender
    }
}

/// Exact match on receiver.
#[derive(Debug, Clone)]
pub struct ReceiverFilter {
    /// Receiver to match.
    pub receiver: String,
}

impl MessageFilter for ReceiverFilter {
    fn matches(&self, msg: &Message) -> bool {
        msg.receiver == self.receiver
    }
}

/// Substring match on content.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    /// Text that must occur in the content.
    pub text: String,
}

impl MessageFilter for ContentFilter {
    fn matches(&self, msg: &Message) -> bool {
        msg.content.contains(&self.text)
    }
}

/// Composite filter: all filters must match (AND). Empty matches everything.
#[derive(Default)]
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn MessageFilter>>,
}

impl MessageFilter for AndFilter {
    fn matches(&self, msg: &Message) -> bool {
        self.filters.iter().all(|f| f.matches(msg))
    }
}

/// Optional search criteria; unset criteria impose no constraint.
///
/// An empty string counts as unset, so `--sender ""` on the command line
/// behaves like omitting the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Exact sender.
    pub sender: Option<String>,
    /// Exact receiver.
    pub receiver: Option<String>,
    /// Substring of content.
    pub text: Option<String>,
}

impl SearchQuery {
    /// Creates a query that matches every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to messages from `sender`.
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Restricts to messages addressed to `receiver`.
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Restricts to messages whose content contains `text`.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builds the combined filter.
    pub fn to_filter(&self) -> AndFilter {
        let mut filters: Vec<Box<dyn MessageFilter>> = Vec::new();
        if let Some(sender) = non_empty(&self.sender) {
            filters.push(Box::new(SenderFilter {
                sender: sender.to_string(),
            }));
        }
        if let Some(receiver) = non_empty(&self.receiver) {
            filters.push(Box::new(ReceiverFilter {
                receiver: receiver.to_string(),
            }));
        }
        if let Some(text) = non_empty(&self.text) {
            filters.push(Box::new(ContentFilter {
                text: text.to_string(),
            }));
        }
        AndFilter { filters }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A search match annotated with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Date of the owning block.
    pub date: String,
    /// Position within the block at search time.
    pub index: usize,
    /// The matching message.
    #[serde(flatten)]
    pub message: Message,
}
