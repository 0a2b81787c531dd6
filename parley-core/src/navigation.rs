//! Roster/conversation navigation state machine.
//!
//! On narrow viewports the roster and the conversation are mutually
//! exclusive; [`View`] says which one is showing. On wide viewports both
//! are visible and only the selection matters.

use crate::contact::{Contact, Roster};

/// Errors from navigation requests.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested contact is not in the roster.
    #[error("unknown contact: {0}")]
    UnknownContact(String),
}

/// Which panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The contact list (initial).
    #[default]
    Roster,
    /// The selected contact's conversation.
    Conversation,
}

/// Outcome of a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A different contact (or the first one) became active.
    Switched,
    /// The already-selected contact was re-opened.
    Reopened,
}

/// Tracks the current view and selected contact.
///
/// Invariant: `View::Conversation` implies a selected contact. Going back
/// keeps the selection so the roster can still highlight it.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    view: View,
    selected: Option<Contact>,
}

impl Navigator {
    /// Start in the roster view with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Currently selected contact, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    /// Open the conversation with `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownContact`] if `name` is not in the
    /// roster. The state is left untouched in that case.
    pub fn select(&mut self, roster: &Roster, name: &str) -> Result<Selection, NavigationError> {
        let contact = roster
            .find(name)
            .ok_or_else(|| NavigationError::UnknownContact(name.to_string()))?;

        let outcome = if self.selected.as_ref() == Some(contact) {
            Selection::Reopened
        } else {
            self.selected = Some(contact.clone());
            Selection::Switched
        };
        self.view = View::Conversation;
        Ok(outcome)
    }

    /// Return to the roster. No-op when already there.
    ///
    /// Returns `true` if the view changed.
    pub const fn go_back(&mut self) -> bool {
        match self.view {
            View::Conversation => {
                self.view = View::Roster;
                true
            }
            View::Roster => false,
        }
    }
}
