//! Application state and event handling.
//!
//! [`App`] owns the conversation [`Session`] plus state that only matters
//! to the terminal: focus, list highlights, scroll offset, and viewport
//! width. Key events are translated into session [`Action`]s here; the
//! session never sees a key code.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use parley_core::clock::{Clock, SystemClock};
use parley_core::composer::pop_glyph;
use parley_core::contact::Contact;
use parley_core::navigation::View;
use parley_core::session::{Action, Effect, Session};

use crate::config::ClientConfig;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Roster search box.
    Search,
    /// Roster contact list (default).
    Roster,
    /// Message composer.
    Composer,
}

/// How the panels are arranged for the current terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Roster and conversation side by side.
    Wide,
    /// Only the panel for the current [`View`] is shown.
    Narrow,
}

/// Main application state.
pub struct App<C: Clock = SystemClock> {
    /// The conversation state machine.
    pub session: Session<C>,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Highlighted row in the filtered roster.
    pub roster_cursor: usize,
    /// Highlighted glyph in the emoji picker.
    pub picker_cursor: usize,
    /// Index of the bottom-most visible message.
    pub message_scroll: usize,
    /// Current terminal width in columns.
    pub width: u16,
    /// Widths below this use [`LayoutMode::Narrow`].
    pub narrow_width: u16,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App<SystemClock> {
    /// Create an application from resolved configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_session(Session::new(config.to_session_config()), config.narrow_width)
    }
}

impl<C: Clock> App<C> {
    /// Wrap an existing session.
    #[must_use]
    pub const fn with_session(session: Session<C>, narrow_width: u16) -> Self {
        Self {
            session,
            focus: PanelFocus::Roster,
            roster_cursor: 0,
            picker_cursor: 0,
            message_scroll: 0,
            width: u16::MAX,
            narrow_width,
            should_quit: false,
        }
    }

    /// Record the terminal width.
    pub const fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Layout for the current width.
    #[must_use]
    pub const fn layout(&self) -> LayoutMode {
        if self.width < self.narrow_width {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    /// Whether the roster panel is on screen.
    #[must_use]
    pub fn shows_roster(&self) -> bool {
        self.layout() == LayoutMode::Wide || self.session.view() == View::Roster
    }

    /// Whether the conversation panel is on screen.
    #[must_use]
    pub fn shows_conversation(&self) -> bool {
        self.layout() == LayoutMode::Wide || self.session.view() == View::Conversation
    }

    /// Contact under the roster highlight.
    #[must_use]
    pub fn highlighted_contact(&self) -> Option<&Contact> {
        self.session
            .visible_contacts()
            .get(self.roster_cursor)
            .copied()
    }

    /// Presence line for the conversation header.
    #[must_use]
    pub fn presence_text(&self) -> String {
        match self.session.selected() {
            Some(contact) if self.session.is_typing() => format!("{contact} is typing..."),
            _ => "Online".to_string(),
        }
    }

    /// Apply an action to the session and carry out its effect.
    pub fn dispatch(&mut self, action: Action) {
        if let Some(effect) = self.session.dispatch(action) {
            self.apply_effect(effect);
        }
    }

    /// Advance session timers. Returns `true` if anything changed.
    pub fn tick(&mut self) -> bool {
        self.session.tick()
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScrollToBottom => self.scroll_to_bottom(),
        }
    }

    fn scroll_to_bottom(&mut self) {
        self.message_scroll = self.session.messages().len().saturating_sub(1);
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Esc, _) => {
                self.escape();
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Search => self.handle_search_key(key),
            PanelFocus::Roster => self.handle_roster_key(key),
            PanelFocus::Composer => self.handle_composer_key(key),
        }
    }

    /// Esc closes the picker, then leaves the conversation, then quits.
    /// In the search box it clears the query first, then returns to the list.
    fn escape(&mut self) {
        if self.focus == PanelFocus::Search {
            if self.session.query().is_empty() {
                self.focus = PanelFocus::Roster;
            } else {
                self.set_query(String::new());
            }
        } else if self.session.is_emoji_picker_open() {
            self.dispatch(Action::ToggleEmojiPicker);
        } else if self.session.view() == View::Conversation {
            self.dispatch(Action::GoBack);
            self.focus = PanelFocus::Roster;
        } else {
            self.should_quit = true;
        }
    }

    /// Cycle focus through the panels that are on screen.
    fn cycle_focus(&mut self) {
        let order = [PanelFocus::Search, PanelFocus::Roster, PanelFocus::Composer];
        let start = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        for step in 1..=order.len() {
            let candidate = order[(start + step) % order.len()];
            if self.can_focus(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    fn can_focus(&self, focus: PanelFocus) -> bool {
        match focus {
            PanelFocus::Search | PanelFocus::Roster => self.shows_roster(),
            PanelFocus::Composer => {
                self.session.selected().is_some() && self.shows_conversation()
            }
        }
    }

    /// Handle key event when the search box is focused.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut query = self.session.query().to_string();
                query.push(c);
                self.set_query(query);
            }
            KeyCode::Backspace => {
                let mut query = self.session.query().to_string();
                pop_glyph(&mut query);
                self.set_query(query);
            }
            KeyCode::Down | KeyCode::Enter => self.focus = PanelFocus::Roster,
            _ => {}
        }
    }

    fn set_query(&mut self, query: String) {
        self.dispatch(Action::Search(query));
        self.roster_cursor = 0;
    }

    /// Handle key event when the roster is focused.
    fn handle_roster_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.roster_cursor = self.roster_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.session.visible_contacts().len().saturating_sub(1);
                if self.roster_cursor < last {
                    self.roster_cursor += 1;
                }
            }
            KeyCode::Char('/') => self.focus = PanelFocus::Search,
            KeyCode::Enter => self.open_highlighted(),
            _ => {}
        }
    }

    fn open_highlighted(&mut self) {
        let Some(name) = self.highlighted_contact().map(|c| c.name().to_string()) else {
            return;
        };
        self.dispatch(Action::SelectContact(name));
        self.picker_cursor = 0;
        self.scroll_to_bottom();
        self.focus = PanelFocus::Composer;
    }

    /// Handle key event when the composer is focused.
    fn handle_composer_key(&mut self, key: KeyEvent) {
        if self.session.is_emoji_picker_open() {
            self.handle_picker_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.picker_cursor = 0;
                self.dispatch(Action::ToggleEmojiPicker);
            }
            (KeyCode::Enter, _) => self.dispatch(Action::Send),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                let mut text = self.session.draft().to_string();
                text.push(c);
                self.dispatch(Action::UpdateText(text));
            }
            (KeyCode::Backspace, _) => {
                let mut text = self.session.draft().to_string();
                pop_glyph(&mut text);
                self.dispatch(Action::UpdateText(text));
            }
            (KeyCode::PageUp | KeyCode::Up, _) => {
                self.message_scroll = self.message_scroll.saturating_sub(1);
            }
            (KeyCode::PageDown | KeyCode::Down, _) => {
                let last = self.session.messages().len().saturating_sub(1);
                if self.message_scroll < last {
                    self.message_scroll += 1;
                }
            }
            _ => {}
        }
    }

    /// Handle key event while the emoji picker is open.
    fn handle_picker_key(&mut self, key: KeyEvent) {
        let count = self.session.emoji_palette().len();
        match (key.code, key.modifiers) {
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.dispatch(Action::ToggleEmojiPicker);
            }
            (KeyCode::Left, _) => {
                self.picker_cursor = self.picker_cursor.saturating_sub(1);
            }
            (KeyCode::Right, _) => {
                if self.picker_cursor + 1 < count {
                    self.picker_cursor += 1;
                }
            }
            (KeyCode::Enter, _) => self.pick_emoji(self.picker_cursor),
            (KeyCode::Char(c @ '1'..='9'), _) => {
                if let Some(digit) = c.to_digit(10) {
                    self.pick_emoji(digit as usize - 1);
                }
            }
            _ => {}
        }
    }

    fn pick_emoji(&mut self, index: usize) {
        let Some(glyph) = self.session.emoji_palette().get(index).cloned() else {
            return;
        };
        self.dispatch(Action::AppendEmoji(glyph));
        self.picker_cursor = 0;
    }
}
