//! Integration tests for the typing indicator debounce.
//!
//! Time is driven by `ManualClock`; the session is ticked every 50 ms the
//! way the event loop polls, and every transition of `is_typing` is
//! recorded with the elapsed time at which it happened.

use std::time::Duration;

use parley_core::clock::ManualClock;
use parley_core::session::{Action, Session, SessionConfig};

const TICK_MS: u64 = 50;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Harness {
    session: Session<ManualClock>,
    clock: ManualClock,
    was_typing: bool,
    transitions: Vec<(bool, Duration)>,
}

impl Harness {
    fn new() -> Self {
        let clock = ManualClock::new();
        let mut session = Session::with_clock(SessionConfig::default(), clock.clone());
        session.dispatch(Action::SelectContact("Rohit Gupta".into()));
        Self {
            session,
            clock,
            was_typing: false,
            transitions: Vec::new(),
        }
    }

    fn observe(&mut self) {
        let now_typing = self.session.is_typing();
        if now_typing != self.was_typing {
            self.transitions.push((now_typing, self.clock.elapsed()));
            self.was_typing = now_typing;
        }
    }

    fn edit(&mut self, text: &str) {
        self.session.dispatch(Action::UpdateText(text.to_string()));
        self.observe();
    }

    /// Advance time in poll-sized steps, ticking the session each step.
    fn run_for(&mut self, ms: u64) {
        let mut remaining = ms;
        while remaining > 0 {
            let step = remaining.min(TICK_MS);
            self.clock.advance_ms(step);
            self.session.tick();
            self.observe();
            remaining -= step;
        }
    }

    fn falls(&self) -> Vec<Duration> {
        self.transitions
            .iter()
            .filter(|(typing, _)| !typing)
            .map(|(_, at)| *at)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn edit_sets_typing_synchronously() {
    let mut h = Harness::new();
    assert!(!h.session.is_typing());
    h.edit("h");
    assert!(h.session.is_typing());
}

#[test]
fn three_quick_edits_produce_one_fall_after_last_edit() {
    let mut h = Harness::new();

    h.edit("h");
    h.run_for(400);
    h.edit("he");
    h.run_for(400);
    h.edit("hey");
    let last_edit = h.clock.elapsed();

    h.run_for(3000);

    let falls = h.falls();
    assert_eq!(falls.len(), 1, "expected exactly one fall, got {falls:?}");
    assert!(falls[0] >= last_edit + Duration::from_millis(1000));
    assert!(falls[0] < last_edit + Duration::from_millis(1000 + TICK_MS));
}

#[test]
fn flag_stays_up_through_the_quiet_period() {
    let mut h = Harness::new();
    h.edit("x");
    h.run_for(950);
    assert!(h.session.is_typing());
    h.run_for(50);
    assert!(!h.session.is_typing());
}

#[test]
fn edit_to_empty_still_restarts_timer() {
    let mut h = Harness::new();
    h.edit("x");
    h.run_for(900);
    h.edit("");
    h.run_for(900);
    assert!(h.session.is_typing());
    h.run_for(100);
    assert!(!h.session.is_typing());
}

#[test]
fn separate_bursts_each_fall_once() {
    let mut h = Harness::new();
    h.edit("a");
    h.run_for(1500);
    h.edit("ab");
    h.run_for(1500);
    assert_eq!(h.falls().len(), 2);
}

#[test]
fn switching_conversation_cancels_pending_expiry() {
    let mut h = Harness::new();
    h.edit("typing to rohit");
    assert!(h.session.typing_pending());

    h.session.dispatch(Action::SelectContact("Riya".into()));

    assert!(!h.session.typing_pending());
    assert!(!h.session.is_typing());
    h.observe();

    // The old deadline passes: nothing fires in the new conversation.
    h.clock.advance_ms(1000);
    assert!(!h.session.tick());

    // A fresh edit in the new conversation gets its own full quiet period.
    h.edit("hi riya");
    let edit_at = h.clock.elapsed();
    h.run_for(2000);
    let last_fall = h.falls().last().copied();
    assert!(last_fall.is_some_and(|t| t >= edit_at + Duration::from_millis(1000)));
}

#[test]
fn emoji_and_send_do_not_restart_timer() {
    let mut h = Harness::new();
    h.edit("hi");
    h.run_for(600);
    h.session.dispatch(Action::AppendEmoji("😂".into()));
    h.session.dispatch(Action::Send);
    h.run_for(400);
    assert!(!h.session.is_typing());
}

#[test]
fn custom_quiet_period_is_honored() {
    let clock = ManualClock::new();
    let config = SessionConfig {
        typing_quiet_period: Duration::from_millis(250),
        ..SessionConfig::default()
    };
    let mut session = Session::with_clock(config, clock.clone());
    session.dispatch(Action::UpdateText("x".into()));

    clock.advance_ms(249);
    assert!(!session.tick());
    clock.advance_ms(1);
    assert!(session.tick());
    assert!(!session.is_typing());
}
