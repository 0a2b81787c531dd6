//! Message composer: draft text, emoji picker, and typing indicator.

use std::time::{Duration, Instant};

use crate::typing::TypingIndicator;

/// Emoji offered by the picker when none are configured.
pub const DEFAULT_EMOJI: [&str; 6] = ["😀", "😎", "🔥", "❤️", "😂", "👍"];

/// Draft state for the active conversation.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
    emoji_picker_open: bool,
    typing: TypingIndicator,
}

impl Composer {
    /// Create an empty composer whose typing flag clears after `quiet`.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            text: String::new(),
            emoji_picker_open: false,
            typing: TypingIndicator::new(quiet),
        }
    }

    /// Current draft text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the emoji picker is open.
    #[must_use]
    pub const fn is_emoji_picker_open(&self) -> bool {
        self.emoji_picker_open
    }

    /// Whether the local user is typing.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.typing.is_typing()
    }

    /// Whether a typing expiry is pending.
    #[must_use]
    pub const fn typing_pending(&self) -> bool {
        self.typing.is_pending()
    }

    /// Replace the draft and restart the typing quiet period.
    pub fn update_text(&mut self, text: String, now: Instant) {
        self.text = text;
        self.typing.on_edit(now);
    }

    /// Open or close the emoji picker.
    pub const fn toggle_emoji_picker(&mut self) {
        self.emoji_picker_open = !self.emoji_picker_open;
    }

    /// Append `glyph` to the end of the draft and close the picker.
    pub fn append_emoji(&mut self, glyph: &str) {
        self.text.push_str(glyph);
        self.emoji_picker_open = false;
    }

    /// Take the draft for sending.
    ///
    /// Returns the raw text and clears the draft when it has visible
    /// content. A blank draft is left alone and `None` is returned.
    pub fn take_draft(&mut self) -> Option<String> {
        if self.text.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }

    /// Advance the typing timer. Returns `true` if typing just stopped.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.typing.tick(now)
    }

    /// Tear down: clear the draft, close the picker, cancel the timer.
    pub fn dispose(&mut self) {
        self.text.clear();
        self.emoji_picker_open = false;
        self.typing.dispose();
    }
}

const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Characters that attach to the glyph before them.
const fn is_attached(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE00}'..='\u{FE0F}'
        | '\u{1F3FB}'..='\u{1F3FF}'
        | ZERO_WIDTH_JOINER
    )
}

/// Remove the last visible glyph from `text`.
///
/// Variation selectors, skin-tone modifiers, combining marks and
/// zero-width-joiner sequences go together with their base character,
/// so `"go❤️"` becomes `"go"` rather than `"go❤"`.
pub fn pop_glyph(text: &mut String) {
    while let Some(c) = text.pop() {
        if is_attached(c) {
            continue;
        }
        if text.ends_with(ZERO_WIDTH_JOINER) {
            text.pop();
            continue;
        }
        break;
    }
}
