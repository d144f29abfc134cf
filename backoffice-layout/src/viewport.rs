use std::time::{Duration, Instant};

use crate::breakpoint::{Breakpoints, ScreenClass};

const DEFAULT_RESIZE_INTERVAL: Duration = Duration::from_millis(50);

/// A screen class transition caused by a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportChange {
    pub width: f32,
    pub previous: ScreenClass,
    pub current: ScreenClass,
}

/// Rate-limited viewport classification.
///
/// Resize bursts are coalesced: samples that arrive within the interval are
/// kept as pending and applied by [`ViewportTracker::flush`], so the last
/// width of a burst always wins.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    breakpoints: Breakpoints,
    interval: Duration,
    width: f32,
    class: ScreenClass,
    last_applied_at: Option<Instant>,
    pending: Option<f32>,
}

impl ViewportTracker {
    pub fn new(breakpoints: Breakpoints, width: f32) -> Self {
        Self {
            breakpoints,
            interval: DEFAULT_RESIZE_INTERVAL,
            width,
            class: breakpoints.classify(width),
            last_applied_at: None,
            pending: None,
        }
    }

    /// Last applied width.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn class(&self) -> ScreenClass {
        self.class
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a resize sample.
    ///
    /// Returns a change only when the sample was applied and moved the
    /// viewport into another class.
    pub fn observe(
        &mut self,
        width: f32,
        now: Instant,
    ) -> Option<ViewportChange> {
        if self.is_throttled(now) {
            self.pending = Some(width);
            return None;
        }

        self.apply(width, now)
    }

    /// Apply a pending sample once the interval has elapsed.
    pub fn flush(&mut self, now: Instant) -> Option<ViewportChange> {
        if self.is_throttled(now) {
            return None;
        }

        let width = self.pending.take()?;
        self.apply(width, now)
    }

    fn is_throttled(&self, now: Instant) -> bool {
        self.last_applied_at
            .map(|last| now.saturating_duration_since(last) < self.interval)
            .unwrap_or(false)
    }

    fn apply(&mut self, width: f32, now: Instant) -> Option<ViewportChange> {
        self.width = width;
        self.last_applied_at = Some(now);
        self.pending = None;

        let current = self.breakpoints.classify(width);
        if current == self.class {
            return None;
        }

        let previous = self.class;
        self.class = current;
        log::debug!("viewport class changed: {previous} -> {current} at {width}");

        Some(ViewportChange {
            width,
            previous,
            current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_first_sample_when_observed_then_class_change_is_reported() {
        let now = Instant::now();
        let mut tracker = ViewportTracker::new(Breakpoints::default(), 1920.0);
        let change = tracker.observe(375.0, now).expect("class should change");
        assert_eq!(change.previous, ScreenClass::ExtraLarge);
        assert_eq!(change.current, ScreenClass::ExtraSmall);
        assert_eq!(tracker.class(), ScreenClass::ExtraSmall);
    }

    #[test]
    fn given_same_class_when_observed_then_no_change_is_reported() {
        let now = Instant::now();
        let mut tracker = ViewportTracker::new(Breakpoints::default(), 1920.0);
        assert_eq!(tracker.observe(1600.0, now), None);
        assert_eq!(tracker.width(), 1600.0);
    }

    #[test]
    fn given_burst_of_resizes_when_flushed_then_last_width_wins() {
        let start = Instant::now();
        let mut tracker = ViewportTracker::new(Breakpoints::default(), 1920.0);
        tracker.observe(1800.0, start);

        let inside = start + Duration::from_millis(10);
        assert_eq!(tracker.observe(900.0, inside), None);
        assert_eq!(tracker.observe(375.0, inside), None);
        assert!(tracker.has_pending());
        assert_eq!(tracker.class(), ScreenClass::ExtraLarge);

        assert_eq!(tracker.flush(inside), None);
        let change = tracker
            .flush(start + Duration::from_millis(60))
            .expect("pending width should apply");
        assert_eq!(change.current, ScreenClass::ExtraSmall);
        assert_eq!(tracker.width(), 375.0);
        assert!(!tracker.has_pending());
    }

    #[test]
    fn given_nothing_pending_when_flushed_then_nothing_happens() {
        let mut tracker = ViewportTracker::new(Breakpoints::default(), 800.0);
        assert_eq!(tracker.flush(Instant::now()), None);
        assert_eq!(tracker.class(), ScreenClass::Medium);
    }
}
