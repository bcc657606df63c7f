//! # Debouncer
//!
//! Holds the latest value until it has been stable for a quiescence window.
//! The clock is passed in so the reducer stays free of I/O and tests can
//! drive time directly.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Records a new value, restarting the window.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns the pending value once the window has elapsed since the last push.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some((_, at)) if now.duration_since(*at) >= self.window);
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
