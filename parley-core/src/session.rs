//! Conversation session: the single owner of all chat state.
//!
//! Every mutation goes through [`Session::dispatch`] as a named [`Action`],
//! or through [`Session::tick`] for timer expiry. The rendering layer only
//! reads the snapshot accessors and applies the returned [`Effect`]s.
//!
//! # History scope
//!
//! Whether each contact has its own timeline is a policy choice
//! ([`HistoryScope`]). `PerContact` is the default; `Shared` keeps one
//! timeline for every contact.

use std::collections::HashMap;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::composer::{Composer, DEFAULT_EMOJI};
use crate::contact::{Contact, DEFAULT_ROSTER, Roster};
use crate::message::{DEFAULT_TIMESTAMP_FORMAT, Message, MessageIdGenerator, Sender};
use crate::navigation::{Navigator, Selection, View};
use crate::timeline::Timeline;
use crate::typing::DEFAULT_QUIET_PERIOD;

/// Display name used for the local user by default.
pub const DEFAULT_LOCAL_NAME: &str = "You";

/// How message history is partitioned between contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryScope {
    /// Each contact has an independent timeline.
    #[default]
    PerContact,
    /// All contacts share one timeline.
    Shared,
}

/// Inputs fixed at session start.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Contact display names, in roster order.
    pub roster: Vec<String>,
    /// Glyphs offered by the emoji picker.
    pub emoji: Vec<String>,
    /// Quiet period before the typing flag clears.
    pub typing_quiet_period: Duration,
    /// strftime format for message timestamps.
    pub timestamp_format: String,
    /// Display name of the local user.
    pub local_name: String,
    /// Timeline partitioning policy.
    pub history_scope: HistoryScope,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.iter().map(ToString::to_string).collect(),
            emoji: DEFAULT_EMOJI.iter().map(ToString::to_string).collect(),
            typing_quiet_period: DEFAULT_QUIET_PERIOD,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            local_name: DEFAULT_LOCAL_NAME.to_string(),
            history_scope: HistoryScope::default(),
        }
    }
}

/// Events accepted from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Set the roster search query.
    Search(String),
    /// Open the conversation with the named contact.
    SelectContact(String),
    /// Return to the roster view.
    GoBack,
    /// Replace the composer draft.
    UpdateText(String),
    /// Open or close the emoji picker.
    ToggleEmojiPicker,
    /// Append a glyph to the draft and close the picker.
    AppendEmoji(String),
    /// Send the draft as a message.
    Send,
}

/// Side effects the rendering layer must carry out after a state commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A message was appended; scroll the message list to its end.
    ScrollToBottom,
}

#[derive(Debug)]
enum Histories {
    PerContact(HashMap<String, Timeline>),
    Shared(Timeline),
}

impl Histories {
    fn new(scope: HistoryScope) -> Self {
        match scope {
            HistoryScope::PerContact => Self::PerContact(HashMap::new()),
            HistoryScope::Shared => Self::Shared(Timeline::new()),
        }
    }

    fn get(&self, contact: &Contact) -> Option<&Timeline> {
        match self {
            Self::PerContact(map) => map.get(contact.name()),
            Self::Shared(timeline) => Some(timeline),
        }
    }

    fn get_mut(&mut self, contact: &Contact) -> &mut Timeline {
        match self {
            Self::PerContact(map) => map.entry(contact.name().to_string()).or_default(),
            Self::Shared(timeline) => timeline,
        }
    }
}

/// The conversation state machine.
#[derive(Debug)]
pub struct Session<C: Clock = SystemClock> {
    clock: C,
    roster: Roster,
    query: String,
    navigator: Navigator,
    composer: Composer,
    histories: Histories,
    scope: HistoryScope,
    ids: MessageIdGenerator,
    emoji: Vec<String>,
    timestamp_format: String,
    local_name: String,
}

impl Session<SystemClock> {
    /// Create a session driven by the system clock.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Create a session driven by `clock`.
    #[must_use]
    pub fn with_clock(config: SessionConfig, clock: C) -> Self {
        let roster = Roster::new(config.roster);
        tracing::debug!(
            contacts = roster.len(),
            scope = ?config.history_scope,
            "session created"
        );
        Self {
            clock,
            roster,
            query: String::new(),
            navigator: Navigator::new(),
            composer: Composer::new(config.typing_quiet_period),
            histories: Histories::new(config.history_scope),
            scope: config.history_scope,
            ids: MessageIdGenerator::new(),
            emoji: config.emoji,
            timestamp_format: config.timestamp_format,
            local_name: config.local_name,
        }
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Search(query) => {
                self.query = query;
                None
            }
            Action::SelectContact(name) => {
                self.select_contact(&name);
                None
            }
            Action::GoBack => {
                if self.navigator.go_back() {
                    tracing::debug!("returned to roster");
                }
                None
            }
            Action::UpdateText(text) => {
                let now = self.clock.now();
                self.composer.update_text(text, now);
                None
            }
            Action::ToggleEmojiPicker => {
                self.composer.toggle_emoji_picker();
                None
            }
            Action::AppendEmoji(glyph) => {
                self.composer.append_emoji(&glyph);
                None
            }
            Action::Send => self.send(),
        }
    }

    /// Advance timers. Returns `true` if the typing flag just cleared.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.composer.tick(now)
    }

    fn select_contact(&mut self, name: &str) {
        match self.navigator.select(&self.roster, name) {
            Ok(Selection::Switched) => {
                self.composer.dispose();
                tracing::debug!(contact = %name, "conversation opened");
            }
            Ok(Selection::Reopened) => {
                tracing::debug!(contact = %name, "conversation reopened");
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring selection");
            }
        }
    }

    fn send(&mut self) -> Option<Effect> {
        let contact = self.navigator.selected()?.clone();
        let content = self.composer.take_draft()?;

        let message = Message::new(
            self.ids.next_id(),
            Sender::Local,
            content,
            &self.clock.local_time(),
            &self.timestamp_format,
        );
        tracing::debug!(id = %message.id(), contact = %contact, "message sent");

        self.histories.get_mut(&contact).append(message);
        Some(Effect::ScrollToBottom)
    }

    // -- Snapshot accessors --

    /// Contacts matching the current search query, in roster order.
    #[must_use]
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.roster.filter(&self.query)
    }

    /// The full roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current navigation view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.navigator.view()
    }

    /// Selected contact, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&Contact> {
        self.navigator.selected()
    }

    /// Messages of the selected conversation, in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        match self.navigator.selected().and_then(|c| self.histories.get(c)) {
            Some(timeline) => timeline.render(),
            None => &[],
        }
    }

    /// Current composer draft.
    #[must_use]
    pub fn draft(&self) -> &str {
        self.composer.text()
    }

    /// Whether the emoji picker is open.
    #[must_use]
    pub const fn is_emoji_picker_open(&self) -> bool {
        self.composer.is_emoji_picker_open()
    }

    /// Whether the typing indicator is raised.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.composer.is_typing()
    }

    /// Whether a typing expiry is pending.
    #[must_use]
    pub const fn typing_pending(&self) -> bool {
        self.composer.typing_pending()
    }

    /// Glyphs offered by the emoji picker.
    #[must_use]
    pub fn emoji_palette(&self) -> &[String] {
        &self.emoji
    }

    /// Display name of the local user.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Timeline partitioning policy in effect.
    #[must_use]
    pub const fn history_scope(&self) -> HistoryScope {
        self.scope
    }

    /// The session clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
