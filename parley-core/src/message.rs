//! Chat message types.
//!
//! A [`Message`] is immutable once built. Emoji glyphs live inside
//! `content`; there is no separate emoji attribute.

use std::fmt;

use chrono::{DateTime, Local};

/// Default timestamp format, e.g. `3:45 PM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-I:%M %p";

/// Opaque per-session message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// Hands out monotonically increasing [`MessageId`]s, starting at 1.
#[derive(Debug, Clone, Default)]
pub struct MessageIdGenerator {
    last: u64,
}

impl MessageIdGenerator {
    /// Create a generator whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Allocate the next id.
    pub const fn next_id(&mut self) -> MessageId {
        self.last += 1;
        MessageId(self.last)
    }
}

/// Who wrote a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sender {
    /// The local user.
    Local,
    /// A roster contact, by display name.
    Contact(String),
}

impl Sender {
    /// Whether this is the local user.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    /// Display name, using `local_name` for the local user.
    #[must_use]
    pub fn display_name<'a>(&'a self, local_name: &'a str) -> &'a str {
        match self {
            Self::Local => local_name,
            Self::Contact(name) => name,
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    content: String,
    timestamp: String,
}

impl Message {
    /// Build a message. The timestamp is formatted now and never again.
    #[must_use]
    pub fn new(
        id: MessageId,
        sender: Sender,
        content: String,
        at: &DateTime<Local>,
        timestamp_format: &str,
    ) -> Self {
        Self {
            id,
            sender,
            content,
            timestamp: format_timestamp(at, timestamp_format),
        }
    }

    /// Message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Message author.
    #[must_use]
    pub const fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Message text, exactly as typed.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Display timestamp captured at creation.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Format a local time for display.
///
/// Falls back to [`DEFAULT_TIMESTAMP_FORMAT`] when `format` is not a valid
/// strftime string.
#[must_use]
pub fn format_timestamp(at: &DateTime<Local>, format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_ok() {
        return out;
    }
    tracing::warn!(format, "invalid timestamp format, using default");
    at.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
}
