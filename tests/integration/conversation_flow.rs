//! Integration tests for the conversation state machine.
//!
//! Verifies:
//! 1. Roster search filters case-insensitively and keeps roster order.
//! 2. Send appends exactly one message and clears the draft.
//! 3. Blank sends leave both timeline and draft untouched.
//! 4. Emoji insertion appends at the end and closes the picker.
//! 5. Navigation: select, back, and idempotent back.
//! 6. History scope policy (per-contact vs shared).
//! 7. Auto-scroll effect fires once per append.

use parley_core::clock::ManualClock;
use parley_core::contact::Contact;
use parley_core::message::Message;
use parley_core::navigation::View;
use parley_core::session::{Action, Effect, HistoryScope, Session, SessionConfig};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn session_with(scope: HistoryScope) -> Session<ManualClock> {
    let config = SessionConfig {
        history_scope: scope,
        ..SessionConfig::default()
    };
    Session::with_clock(config, ManualClock::new())
}

fn session() -> Session<ManualClock> {
    session_with(HistoryScope::PerContact)
}

fn send(session: &mut Session<ManualClock>, text: &str) -> Option<Effect> {
    session.dispatch(Action::UpdateText(text.to_string()));
    session.dispatch(Action::Send)
}

fn contents(session: &Session<ManualClock>) -> Vec<String> {
    session
        .messages()
        .iter()
        .map(|m| m.content().to_string())
        .collect()
}

fn visible(session: &Session<ManualClock>) -> Vec<String> {
    session
        .visible_contacts()
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Contact directory
// ---------------------------------------------------------------------------

#[test]
fn empty_search_shows_full_roster() {
    let s = session();
    assert_eq!(visible(&s), vec!["Rohit Gupta", "Riya", "Sam", "Sakshi"]);
}

#[test]
fn search_is_case_insensitive_and_ordered() {
    let mut s = session();
    s.dispatch(Action::Search("SA".into()));
    assert_eq!(visible(&s), vec!["Sam", "Sakshi"]);

    s.dispatch(Action::Search("i".into()));
    assert_eq!(visible(&s), vec!["Rohit Gupta", "Riya", "Sakshi"]);
}

#[test]
fn search_without_match_is_empty_not_error() {
    let mut s = session();
    s.dispatch(Action::Search("#$%".into()));
    assert!(s.visible_contacts().is_empty());
}

#[test]
fn search_does_not_change_selection() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Riya".into()));
    s.dispatch(Action::Search("zzz".into()));
    assert_eq!(s.selected().map(Contact::name), Some("Riya"));
}

// ---------------------------------------------------------------------------
// Composer send
// ---------------------------------------------------------------------------

#[test]
fn send_hi_appends_one_message_and_clears_draft() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Sam".into()));
    let before = s.messages().len();

    send(&mut s, "hi");

    assert_eq!(s.messages().len(), before + 1);
    let last = s.messages().last().map(Message::content);
    assert_eq!(last, Some("hi"));
    assert_eq!(s.draft(), "");
}

#[test]
fn send_whitespace_is_noop() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Sam".into()));
    send(&mut s, "first");

    assert_eq!(send(&mut s, "  "), None);

    assert_eq!(contents(&s), vec!["first"]);
    assert_eq!(s.draft(), "  ");
}

#[test]
fn send_keeps_surrounding_whitespace() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Sam".into()));
    send(&mut s, "  padded  ");
    assert_eq!(contents(&s), vec!["  padded  "]);
}

#[test]
fn sent_message_has_local_sender_and_timestamp() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Sam".into()));
    send(&mut s, "stamp me");

    let msg = &s.messages()[0];
    assert!(msg.sender().is_local());
    assert_eq!(msg.sender().display_name(s.local_name()), "You");
    assert!(!msg.timestamp().is_empty());
}

#[test]
fn timestamp_is_not_recomputed() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Sam".into()));
    send(&mut s, "early");
    let stamp = s.messages()[0].timestamp().to_string();

    s.clock().advance(std::time::Duration::from_secs(3 * 3600));
    send(&mut s, "late");

    assert_eq!(s.messages()[0].timestamp(), stamp);
}

#[test]
fn repeated_sends_preserve_insertion_order() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Riya".into()));
    for text in ["one", "two", "three", "two"] {
        send(&mut s, text);
    }
    assert_eq!(contents(&s), vec!["one", "two", "three", "two"]);
}

// ---------------------------------------------------------------------------
// Emoji picker
// ---------------------------------------------------------------------------

#[test]
fn append_emoji_on_go_yields_go_fire_and_closes_picker() {
    for open_first in [false, true] {
        let mut s = session();
        s.dispatch(Action::SelectContact("Riya".into()));
        s.dispatch(Action::UpdateText("go".into()));
        if open_first {
            s.dispatch(Action::ToggleEmojiPicker);
        }

        s.dispatch(Action::AppendEmoji("🔥".into()));

        assert_eq!(s.draft(), "go🔥");
        assert!(!s.is_emoji_picker_open());
    }
}

#[test]
fn emoji_only_message_can_be_sent() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Riya".into()));
    s.dispatch(Action::AppendEmoji("👍".into()));
    assert_eq!(s.dispatch(Action::Send), Some(Effect::ScrollToBottom));
    assert_eq!(contents(&s), vec!["👍"]);
}

#[test]
fn palette_matches_default_glyphs() {
    let s = session();
    assert_eq!(s.emoji_palette(), ["😀", "😎", "🔥", "❤️", "😂", "👍"]);
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn select_back_back() {
    let mut s = session();
    assert_eq!(s.view(), View::Roster);

    s.dispatch(Action::SelectContact("Sakshi".into()));
    assert_eq!(s.view(), View::Conversation);
    assert_eq!(s.selected().map(Contact::name), Some("Sakshi"));

    s.dispatch(Action::GoBack);
    assert_eq!(s.view(), View::Roster);

    s.dispatch(Action::GoBack);
    assert_eq!(s.view(), View::Roster);
    // Selection is retained for highlighting.
    assert_eq!(s.selected().map(Contact::name), Some("Sakshi"));
}

#[test]
fn unknown_contact_leaves_state_unchanged() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Sam".into()));
    s.dispatch(Action::GoBack);

    s.dispatch(Action::SelectContact("sam".into()));

    assert_eq!(s.view(), View::Roster);
    assert_eq!(s.selected().map(Contact::name), Some("Sam"));
}

#[test]
fn no_messages_without_selection() {
    let s = session();
    assert!(s.messages().is_empty());
}

// ---------------------------------------------------------------------------
// History scope
// ---------------------------------------------------------------------------

#[test]
fn per_contact_history_is_isolated() {
    let mut s = session_with(HistoryScope::PerContact);
    s.dispatch(Action::SelectContact("Riya".into()));
    send(&mut s, "to riya");
    s.dispatch(Action::SelectContact("Sam".into()));
    send(&mut s, "to sam");

    assert_eq!(contents(&s), vec!["to sam"]);
    s.dispatch(Action::SelectContact("Riya".into()));
    assert_eq!(contents(&s), vec!["to riya"]);
}

#[test]
fn shared_history_is_common_to_all_contacts() {
    let mut s = session_with(HistoryScope::Shared);
    s.dispatch(Action::SelectContact("Riya".into()));
    send(&mut s, "to riya");
    s.dispatch(Action::SelectContact("Sam".into()));
    send(&mut s, "to sam");

    assert_eq!(contents(&s), vec!["to riya", "to sam"]);
    s.dispatch(Action::SelectContact("Rohit Gupta".into()));
    assert_eq!(contents(&s), vec!["to riya", "to sam"]);
}

#[test]
fn history_survives_going_back() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Riya".into()));
    send(&mut s, "still here");
    s.dispatch(Action::GoBack);
    s.dispatch(Action::SelectContact("Riya".into()));
    assert_eq!(contents(&s), vec!["still here"]);
}

// ---------------------------------------------------------------------------
// Auto-scroll effect
// ---------------------------------------------------------------------------

#[test]
fn scroll_effect_once_per_append() {
    let mut s = session();
    s.dispatch(Action::SelectContact("Riya".into()));

    let effects: Vec<_> = [
        Action::UpdateText("a".into()),
        Action::Send,
        Action::ToggleEmojiPicker,
        Action::AppendEmoji("😀".into()),
        Action::Send,
        Action::Send,
        Action::Search("r".into()),
        Action::GoBack,
    ]
    .into_iter()
    .filter_map(|action| s.dispatch(action))
    .collect();

    assert_eq!(effects, vec![Effect::ScrollToBottom, Effect::ScrollToBottom]);
    assert_eq!(s.messages().len(), 2);
}
