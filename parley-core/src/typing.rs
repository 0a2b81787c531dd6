//! Typing indicator driven by a cancellable debounce timer.
//!
//! Every composer edit raises the indicator and pushes its expiry out by
//! the quiet period. The indicator drops back to idle only once the quiet
//! period passes with no further edits.
//!
//! The timer is an explicit deadline rather than a spawned callback: the
//! event loop polls it through [`TypingIndicator::tick`], and
//! [`TypingIndicator::dispose`] removes the deadline outright so nothing
//! can fire after teardown.

use std::time::{Duration, Instant};

/// Default quiet period before the typing indicator clears.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// A single-deadline debounce timer with schedule/cancel semantics.
///
/// At most one deadline is pending. Scheduling always supersedes the
/// previous deadline.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Create an idle timer with the given quiet period.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Cancel any pending deadline and schedule a new one at `now + quiet`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Drop the pending deadline, if any.
    pub const fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the timer if its deadline has passed.
    ///
    /// Returns `true` exactly once per scheduled deadline; the deadline is
    /// cleared when it fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

/// Local "is typing" presence flag.
#[derive(Debug, Clone, Default)]
pub struct TypingIndicator {
    is_typing: bool,
    timer: DebounceTimer,
}

impl TypingIndicator {
    /// Create an idle indicator with the given quiet period.
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            is_typing: false,
            timer: DebounceTimer::new(quiet),
        }
    }

    /// Record an edit: raise the flag and restart the quiet period.
    pub fn on_edit(&mut self, now: Instant) {
        self.is_typing = true;
        self.timer.schedule(now);
    }

    /// Advance the timer. Returns `true` if the flag just dropped to idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.is_typing = false;
            tracing::trace!("typing indicator expired");
            return true;
        }
        false
    }

    /// Cancel the pending expiry and clear the flag.
    pub const fn dispose(&mut self) {
        self.timer.cancel();
        self.is_typing = false;
    }

    /// Whether the local user is currently typing.
    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Whether an expiry is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }
}
