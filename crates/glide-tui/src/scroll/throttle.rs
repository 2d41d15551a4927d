//! Event throttle for the scroll-position listener.

use std::time::{Duration, Instant};

/// Coalesces a burst of events into one deferred handler run per interval.
///
/// `request` arms a deadline only when none is pending, so repeated events
/// inside the window are absorbed. `fire` reports an expired deadline and
/// clears it; the caller then recomputes from current state rather than from
/// any intermediate event.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Note an event at `now`; a no-op while a run is already pending
    pub fn request(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// True exactly once per armed window, after the deadline passes
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
