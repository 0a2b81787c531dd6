//! Append-only message history for a conversation.

use crate::message::Message;

/// Ordered, append-only sequence of messages.
///
/// Order is insertion order; ids and timestamps play no part in it.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    messages: Vec<Message>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a message at the end.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Messages in insertion order.
    #[must_use]
    pub fn render(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the timeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
