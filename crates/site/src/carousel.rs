//! Image carousel for project galleries.

use std::time::{Duration, Instant};

/// Autoplay interval when none is given.
pub const DEFAULT_AUTOPLAY: Duration = Duration::from_secs(3);

/// Carousel position with arrows, dots and optional autoplay.
///
/// Autoplay pauses while the pointer hovers the carousel. An empty
/// carousel ignores every input.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: Option<Duration>,
    hovered: bool,
    last_change: Instant,
}

impl Carousel {
    pub fn new(len: usize, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            autoplay: None,
            hovered: false,
            last_change: now,
        }
    }

    pub fn with_autoplay(mut self, interval: Option<Duration>) -> Self {
        self.autoplay = Some(interval.unwrap_or(DEFAULT_AUTOPLAY));
        self
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Number of dots to draw.
    pub fn dots(&self) -> usize {
        self.len
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

    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.last_change = now;
        true
    }

    /// Leaving the carousel restarts the autoplay clock.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered && !hovered {
            self.last_change = now;
        }
        self.hovered = hovered;
    }

    /// Advance if autoplay is on, not hovered, and the interval elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(interval) = self.autoplay else {
            return false;
        };
        if self.hovered || self.len <= 1 || now.duration_since(self.last_change) < interval {
            return false;
        }
        self.next(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_wrap_both_ways() {
        let now = Instant::now();
        let mut c = Carousel::new(3, now);
        c.prev(now);
        assert_eq!(c.current(), Some(2));
        c.next(now);
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn autoplay_pauses_while_hovered() {
        let start = Instant::now();
        let mut c = Carousel::new(3, start).with_autoplay(None);

        c.set_hovered(true, start);
        assert!(!c.tick(start + Duration::from_secs(10)));

        c.set_hovered(false, start + Duration::from_secs(10));
        assert!(!c.tick(start + Duration::from_secs(12)));
        assert!(c.tick(start + Duration::from_secs(13)));
        assert_eq!(c.current(), Some(1));
    }

    #[test]
    fn without_autoplay_tick_is_inert() {
        let start = Instant::now();
        let mut c = Carousel::new(3, start);
        assert!(!c.tick(start + Duration::from_secs(60)));
    }

    #[test]
    fn empty_carousel_ignores_input() {
        let now = Instant::now();
        let mut c = Carousel::new(0, now).with_autoplay(None);
        c.next(now);
        c.prev(now);
        assert!(!c.go_to(0, now));
        assert!(!c.tick(now + Duration::from_secs(60)));
        assert_eq!(c.current(), None);
        assert_eq!(c.dots(), 0);
    }
}
