//! Property-based tests for message ordering.
//!
//! Uses proptest to verify that any sequence of drafts sent through the
//! session renders in send order, with blank drafts skipped and every
//! successful send producing exactly one scroll effect.

use parley_core::clock::ManualClock;
use parley_core::message::Message;
use parley_core::session::{Action, Effect, Session, SessionConfig};
use proptest::prelude::*;

/// Strategy for generating drafts, including whitespace-only ones.
fn arb_draft() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9 ]{1,16}",
        "[ \t]{0,4}",
    ]
}

proptest! {
    #[test]
    fn sends_render_in_insertion_order(drafts in prop::collection::vec(arb_draft(), 0..32)) {
        let clock = ManualClock::new();
        let mut session = Session::with_clock(SessionConfig::default(), clock.clone());
        session.dispatch(Action::SelectContact("Riya".into()));

        let mut expected = Vec::new();
        let mut scrolls = 0;
        for draft in &drafts {
            clock.advance_ms(10);
            session.dispatch(Action::UpdateText(draft.clone()));
            if session.dispatch(Action::Send) == Some(Effect::ScrollToBottom) {
                scrolls += 1;
            }
            if !draft.trim().is_empty() {
                expected.push(draft.clone());
            }
        }

        let rendered: Vec<String> = session
            .messages()
            .iter()
            .map(|m| m.content().to_string())
            .collect();
        prop_assert_eq!(&rendered, &expected);
        prop_assert_eq!(scrolls, expected.len());
    }

    #[test]
    fn ids_are_unique_and_increasing(count in 1usize..24) {
        let mut session = Session::with_clock(SessionConfig::default(), ManualClock::new());
        session.dispatch(Action::SelectContact("Sam".into()));
        for i in 0..count {
            session.dispatch(Action::UpdateText(format!("m{i}")));
            session.dispatch(Action::Send);
        }
        let ids: Vec<_> = session.messages().iter().map(Message::id).collect();
        prop_assert_eq!(ids.len(), count);
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
