//! Single-slot debouncing.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling replaces
//! whatever was pending and restarts the quiet window; the value is released
//! by [`Debouncer::poll`] only once the window has passed without another
//! schedule. Callers drive it from their own loop, passing the current time.

use std::time::{Duration, Instant};

/// Quiet window used by the search field unless configured otherwise.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    slot: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self { window, slot: None }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replaces any pending value with `value`, due one window after `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.slot = Some(Pending {
            value,
            due: now + self.window,
        });
    }

    /// Releases the pending value if it is due. A released value is gone;
    /// later polls return `None` until something new is scheduled.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.slot.as_ref().is_some_and(|p| now >= p.due) {
            self.slot.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn due_at(&self) -> Option<Instant> {
        self.slot.as_ref().map(|p| p.due)
    }

    /// Time left until the pending value is due (zero if overdue).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due_at().map(|due| due.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}
