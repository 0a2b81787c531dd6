//! Time sources for the conversation state machine.
//!
//! The session needs two kinds of time: a monotonic [`Instant`] to drive
//! the typing debounce, and local wall-clock time to stamp messages.
//! Both come from a [`Clock`] so tests can control them without sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Source of monotonic and wall-clock time.
pub trait Clock {
    /// Current monotonic instant.
    fn now(&self) -> Instant;

    /// Current local wall-clock time.
    fn local_time(&self) -> DateTime<Local>;
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_time(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Clones share the same offset, so a test can keep one handle and move
/// the other into a [`Session`](crate::session::Session).
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    wall: DateTime<Local>,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock frozen at the current moment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            wall: Local::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Total time elapsed since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }

    fn local_time(&self) -> DateTime<Local> {
        self.wall + self.offset.get()
    }
}
