//! Per-section windowing: the pure function mapping `(section, progress)`
//! to the visual parameters the frontend writes to the DOM each frame.
//!
//! A section owns a `1/n` slice of the progress range and blends with its
//! neighbors inside a small overlap window at each edge, so adjacent
//! sections cross-fade instead of cutting hard. Two documented special
//! cases: section 0 never fades in, and the last section never fades out.

use crate::config::SceneConfig;
use crate::constants::{ACTIVE_Z_INDEX, BLEND_Z_INDEX, ENTRY_DRIFT_PX, ENTRY_SCALE, HIDDEN_Z_INDEX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Entry,
    Active,
    Exit,
}

/// Derived visual parameters for one section at one progress value.
/// Stateless, recomputed every frame, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub scale: f32,
    pub blur_px: f32,
    pub pointer_events: bool,
    pub z_index: i32,
}

impl VisualState {
    fn hidden() -> Self {
        Self {
            opacity: 0.0,
            translate_y_px: 0.0,
            scale: 1.0,
            blur_px: 0.0,
            pointer_events: false,
            z_index: HIDDEN_Z_INDEX,
        }
    }

    fn active() -> Self {
        Self {
            opacity: 1.0,
            translate_y_px: 0.0,
            scale: 1.0,
            blur_px: 0.0,
            pointer_events: true,
            z_index: ACTIVE_Z_INDEX,
        }
    }
}

/// Section considered "current" at this progress.
#[inline]
pub fn active_index(progress: f32, total: usize) -> usize {
    debug_assert!(total >= 1);
    let p = progress.clamp(0.0, 1.0);
    ((p * total as f32).floor() as usize).min(total - 1)
}

/// Which phase of its window section `index` is in at `progress`.
pub fn phase_of(index: usize, progress: f32, cfg: &SceneConfig) -> Phase {
    let n = cfg.total_states;
    debug_assert!(index < n);
    let p = progress.clamp(0.0, 1.0);
    let slice = cfg.slice();
    let overlap = cfg.overlap();
    let start = index as f32 * slice;
    let end = start + slice;

    let last = index == n - 1;
    if p < start {
        return Phase::Hidden;
    }
    // Section 0 starts fully visible; its entry window is already active.
    if index > 0 && overlap > 0.0 && p < start + overlap {
        return Phase::Entry;
    }
    if p < end || last {
        // The last section is pinned active through progress 1.0.
        return Phase::Active;
    }
    if overlap > 0.0 && p < end + overlap {
        return Phase::Exit;
    }
    Phase::Hidden
}

/// The windowing function: derive the visual parameters for section
/// `index` at `progress`. Opacity is clamped to [0, 1] and pointer events
/// are enabled only above the visibility threshold so fading sections
/// never intercept clicks.
pub fn compute_window(index: usize, progress: f32, cfg: &SceneConfig) -> VisualState {
    let p = progress.clamp(0.0, 1.0);
    let slice = cfg.slice();
    let overlap = cfg.overlap();
    let start = index as f32 * slice;
    let end = start + slice;

    let mut vs = match phase_of(index, p, cfg) {
        Phase::Hidden => VisualState::hidden(),
        Phase::Active => VisualState::active(),
        Phase::Entry => {
            let t = ((p - start) / overlap).clamp(0.0, 1.0);
            VisualState {
                opacity: t,
                translate_y_px: ENTRY_DRIFT_PX * (1.0 - t),
                scale: ENTRY_SCALE + (1.0 - ENTRY_SCALE) * t,
                blur_px: 0.0,
                pointer_events: false,
                z_index: BLEND_Z_INDEX,
            }
        }
        Phase::Exit => {
            let t = ((p - end) / overlap).clamp(0.0, 1.0);
            VisualState {
                opacity: 1.0 + (cfg.exit_opacity - 1.0) * t,
                translate_y_px: 0.0,
                scale: 1.0 + (cfg.exit_scale - 1.0) * t,
                blur_px: cfg.exit_blur_px * t,
                pointer_events: false,
                z_index: BLEND_Z_INDEX,
            }
        }
    };

    vs.opacity = vs.opacity.clamp(0.0, 1.0);
    vs.pointer_events = vs.opacity > cfg.pointer_threshold;
    vs
}
