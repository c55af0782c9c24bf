//! Pinned-region geometry and the inertial scroll tracker.
//!
//! The frontend feeds raw wheel/touch deltas into a [`ProgressTracker`];
//! each frame the tracker eases its smoothed offset toward the target and
//! the [`PinRegion`] maps that offset to a normalized progress in [0, 1].

use crate::config::SceneConfig;
use crate::constants::{SMOOTH_TAU_SEC, SNAP_EPSILON_PX};

/// Scroll-space extent of the pinned choreography region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinRegion {
    pub pin_start: f64,
    pub height: f64,
}

impl PinRegion {
    /// Region sized for the scene: each section contributes
    /// `scroll_per_state_vh` percent of the viewport height.
    pub fn for_scene(cfg: &SceneConfig, viewport_height: f64, pin_top: f64) -> Self {
        let per_state = cfg.scroll_per_state_vh as f64 / 100.0 * viewport_height;
        let height = (cfg.total_states as f64 * per_state).max(1.0);
        Self {
            pin_start: pin_top,
            height,
        }
    }

    /// Normalized progress for a scroll offset, clamped to [0, 1].
    #[inline]
    pub fn progress_for_offset(&self, offset: f64) -> f32 {
        (((offset - self.pin_start) / self.height).clamp(0.0, 1.0)) as f32
    }

    /// Offset at which progress reaches 1.0.
    #[inline]
    pub fn pin_end(&self) -> f64 {
        self.pin_start + self.height
    }
}

/// Virtual scroll offset with inertial smoothing. Input events move the
/// target; `step` eases the smoothed offset toward it with an exponential
/// time constant and snaps when close enough to stop asymptotic creep.
#[derive(Clone, Debug, Default)]
pub struct ProgressTracker {
    target: f64,
    smoothed: f64,
    max_offset: f64,
}

impl ProgressTracker {
    pub fn new(max_offset: f64) -> Self {
        Self {
            target: 0.0,
            smoothed: 0.0,
            max_offset: max_offset.max(0.0),
        }
    }

    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        self.target = self.target.clamp(0.0, self.max_offset);
        self.smoothed = self.smoothed.clamp(0.0, self.max_offset);
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Accumulate an input delta (pixels) into the target offset.
    pub fn add_delta(&mut self, delta: f64) {
        self.target = (self.target + delta).clamp(0.0, self.max_offset);
    }

    /// Jump both target and smoothed offset, skipping the ease.
    pub fn jump_to(&mut self, offset: f64) {
        self.target = offset.clamp(0.0, self.max_offset);
        self.smoothed = self.target;
    }

    /// Advance the smoothing by one frame; returns the smoothed offset.
    pub fn step(&mut self, dt_sec: f32) -> f64 {
        let alpha = 1.0 - (-(dt_sec.max(0.0) as f64) / SMOOTH_TAU_SEC as f64).exp();
        self.smoothed += (self.target - self.smoothed) * alpha;
        if (self.target - self.smoothed).abs() < SNAP_EPSILON_PX {
            self.smoothed = self.target;
        }
        self.smoothed
    }

    pub fn offset(&self) -> f64 {
        self.smoothed
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.smoothed == self.target
    }
}
