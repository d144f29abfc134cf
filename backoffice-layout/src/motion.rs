use std::time::{Duration, Instant};

/// Lifecycle of the navigation panel.
///
/// In compact mode `Closed` means the panel is unmounted and `Opening` /
/// `Closing` are presence fades. In regular mode `Closed` is the collapsed
/// rail and the in-between phases animate width and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Timed transition between the closed and open panel states.
///
/// Only [`retarget`] starts a transition; [`tick`] settles it. Retargeting
/// mid-flight reverses from the current progress, so a quick double toggle
/// ends where it started.
///
/// [`retarget`]: PanelMotion::retarget
/// [`tick`]: PanelMotion::tick
#[derive(Debug, Clone)]
pub struct PanelMotion {
    phase: PanelPhase,
    duration: Duration,
    started_at: Option<Instant>,
    origin: f32,
}

impl PanelMotion {
    /// Create a settled motion.
    pub fn new(open: bool, duration: Duration) -> Self {
        Self {
            phase: if open {
                PanelPhase::Open
            } else {
                PanelPhase::Closed
            },
            duration,
            started_at: None,
            origin: if open { 1.0 } else { 0.0 },
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Whether the panel is heading to (or resting in) the open state.
    pub fn is_target_open(&self) -> bool {
        matches!(self.phase, PanelPhase::Opening | PanelPhase::Open)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, PanelPhase::Opening | PanelPhase::Closing)
    }

    /// Whether a presence-animated panel must stay in the widget tree.
    pub fn is_mounted(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    /// Start a transition toward `open` and return the new phase.
    ///
    /// Retargeting to the current target is a no-op.
    pub fn retarget(&mut self, open: bool, now: Instant) -> PanelPhase {
        if self.is_target_open() == open {
            return self.phase;
        }

        self.origin = self.linear(now);
        self.started_at = Some(now);
        self.phase = if open {
            PanelPhase::Opening
        } else {
            PanelPhase::Closing
        };

        if self.duration.is_zero() {
            self.settle();
        }

        self.phase
    }

    /// Settle a finished transition. Returns the new phase when it changed.
    pub fn tick(&mut self, now: Instant) -> Option<PanelPhase> {
        if !self.is_animating() {
            return None;
        }

        let linear = self.linear(now);
        let finished = match self.phase {
            PanelPhase::Opening => linear >= 1.0,
            PanelPhase::Closing => linear <= 0.0,
            PanelPhase::Open | PanelPhase::Closed => false,
        };

        if finished {
            self.settle();
            Some(self.phase)
        } else {
            None
        }
    }

    /// Eased progress in `[0, 1]`, where `1` is fully open.
    pub fn progress(&self, now: Instant) -> f32 {
        ease_in_out(self.linear(now))
    }

    fn linear(&self, now: Instant) -> f32 {
        let elapsed = self
            .started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or_default();
        let fraction = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        match self.phase {
            PanelPhase::Closed => 0.0,
            PanelPhase::Open => 1.0,
            PanelPhase::Opening => (self.origin + fraction).min(1.0),
            PanelPhase::Closing => (self.origin - fraction).max(0.0),
        }
    }

    fn settle(&mut self) {
        let open = self.is_target_open();
        self.phase = if open {
            PanelPhase::Open
        } else {
            PanelPhase::Closed
        };
        self.origin = if open { 1.0 } else { 0.0 };
        self.started_at = None;
    }
}

/// Cubic ease-in-out over `[0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(200);

    #[test]
    fn given_closed_motion_when_retargeted_open_then_phase_is_opening() {
        let start = Instant::now();
        let mut motion = PanelMotion::new(false, DURATION);
        assert!(!motion.is_mounted());

        assert_eq!(motion.retarget(true, start), PanelPhase::Opening);
        assert!(motion.is_mounted());
        assert!(motion.is_animating());
        assert_eq!(motion.progress(start), 0.0);
    }

    #[test]
    fn given_running_transition_when_duration_elapses_then_tick_settles() {
        let start = Instant::now();
        let mut motion = PanelMotion::new(false, DURATION);
        motion.retarget(true, start);

        assert_eq!(motion.tick(start + Duration::from_millis(50)), None);
        assert_eq!(motion.tick(start + DURATION), Some(PanelPhase::Open));
        assert!(!motion.is_animating());
        assert_eq!(motion.progress(start + DURATION * 2), 1.0);
    }

    #[test]
    fn given_closing_panel_when_settled_then_panel_unmounts() {
        let start = Instant::now();
        let mut motion = PanelMotion::new(true, DURATION);
        assert_eq!(motion.retarget(false, start), PanelPhase::Closing);
        assert!(motion.is_mounted());

        assert_eq!(
            motion.tick(start + DURATION + Duration::from_millis(1)),
            Some(PanelPhase::Closed)
        );
        assert!(!motion.is_mounted());
    }

    #[test]
    fn given_transition_midway_when_reversed_then_progress_continues_from_current()
     {
        let start = Instant::now();
        let mut motion = PanelMotion::new(false, DURATION);
        motion.retarget(true, start);

        let midway = start + Duration::from_millis(100);
        let before = motion.progress(midway);
        assert_eq!(motion.retarget(false, midway), PanelPhase::Closing);
        let after = motion.progress(midway);
        assert!((before - after).abs() < 1e-6);

        assert_eq!(
            motion.tick(midway + Duration::from_millis(100)),
            Some(PanelPhase::Closed)
        );
    }

    #[test]
    fn given_same_target_when_retargeted_then_transition_is_unchanged() {
        let start = Instant::now();
        let mut motion = PanelMotion::new(true, DURATION);
        assert_eq!(motion.retarget(true, start), PanelPhase::Open);
        assert!(!motion.is_animating());
    }

    #[test]
    fn given_zero_duration_when_retargeted_then_motion_settles_immediately() {
        let mut motion = PanelMotion::new(true, Duration::ZERO);
        assert_eq!(motion.retarget(false, Instant::now()), PanelPhase::Closed);
        assert!(!motion.is_mounted());
    }

    #[test]
    fn given_easing_curve_when_sampled_then_endpoints_and_symmetry_hold() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(0.25) + ease_in_out(0.75) - 1.0).abs() < 1e-6);
        assert_eq!(ease_in_out(-2.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }
}
