//! Automatic testimonial rotation.

use std::time::{Duration, Instant};

/// How long each testimonial stays on screen.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(6);

/// Index of the testimonial on screen, advanced by [`tick`](Self::tick).
///
/// Time is passed in by the caller so the renderer owns the clock.
#[derive(Debug, Clone)]
pub struct TestimonialRotator {
    len: usize,
    index: usize,
    interval: Duration,
    last_change: Instant,
}

impl TestimonialRotator {
    pub fn new(len: usize, now: Instant) -> Self {
        Self::with_interval(len, ROTATION_INTERVAL, now)
    }

    pub fn with_interval(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            interval,
            last_change: now,
        }
    }

    /// Index on screen, `None` when there is nothing to show.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Advance when the interval has elapsed. Zero or one item never rotates.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len <= 1 || now.duration_since(self.last_change) < self.interval {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.last_change = now;
        true
    }

    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
            self.last_change = now;
        }
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
            self.last_change = now;
        }
    }

    /// Jump to `index`. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.last_change = now;
        true
    }

    /// The list changed size (e.g. after a reload).
    pub fn set_len(&mut self, len: usize, now: Instant) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
        self.last_change = now;
    }
}
