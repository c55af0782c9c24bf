use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("total_states must be at least 1")]
    NoStates,
    #[error("overlap_fraction {0} outside [0, 0.5)")]
    BadOverlap(f32),
    #[error("scroll_per_state_vh must be positive, got {0}")]
    BadScrollHeight(f32),
    #[error("crossfade_secs must be positive, got {0}")]
    BadCrossfade(f32),
}

/// All scene tuning in one place. The section count and overlap fraction
/// used to be re-derived independently by every consumer; every module now
/// reads them from here.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Number of choreographed sections in the pinned region.
    pub total_states: usize,
    /// Fraction of a section's progress slice spent blending with its
    /// neighbor, in [0, 0.5). Zero means hard cuts.
    pub overlap_fraction: f32,
    /// Scroll travel per section as a percentage of viewport height.
    pub scroll_per_state_vh: f32,
    /// Opacity a section decays to while exiting.
    pub exit_opacity: f32,
    /// Blur a section ramps to while exiting.
    pub exit_blur_px: f32,
    /// Scale a section shrinks to while exiting.
    pub exit_scale: f32,
    /// Sections with derived opacity above this accept pointer input.
    pub pointer_threshold: f32,
    /// Background layer cross-fade duration.
    pub crossfade_secs: f32,
    /// Total vertical background drift across the full progress range.
    pub parallax_strength_px: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            total_states: 7,
            overlap_fraction: 0.15,
            scroll_per_state_vh: 100.0,
            exit_opacity: 0.6,
            exit_blur_px: 6.0,
            exit_scale: 0.97,
            pointer_threshold: 0.5,
            crossfade_secs: 0.8,
            parallax_strength_px: 120.0,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_states == 0 {
            return Err(ConfigError::NoStates);
        }
        if !(0.0..0.5).contains(&self.overlap_fraction) {
            return Err(ConfigError::BadOverlap(self.overlap_fraction));
        }
        if self.scroll_per_state_vh <= 0.0 {
            return Err(ConfigError::BadScrollHeight(self.scroll_per_state_vh));
        }
        if self.crossfade_secs <= 0.0 {
            return Err(ConfigError::BadCrossfade(self.crossfade_secs));
        }
        Ok(())
    }

    /// Progress span owned by one section.
    #[inline]
    pub fn slice(&self) -> f32 {
        1.0 / self.total_states as f32
    }

    /// Progress span of the entry/exit blend window.
    #[inline]
    pub fn overlap(&self) -> f32 {
        self.slice() * self.overlap_fraction
    }
}
