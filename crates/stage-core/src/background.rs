//! Background layer cross-fade and parallax.
//!
//! The [`Crossfade`] state machine reacts to active-index changes (not to
//! every progress tick): the previous layer fades out over a fixed
//! duration while the new one fades in. Exactly one layer is "current" at
//! a time, which also decides which video element is allowed to play.

use crate::config::SceneConfig;

#[derive(Clone, Copy, Debug)]
struct Fade {
    from: usize,
    remaining: f32,
}

#[derive(Clone, Debug)]
pub struct Crossfade {
    current: usize,
    fade: Option<Fade>,
    duration: f32,
}

impl Crossfade {
    pub fn new(initial: usize, duration_secs: f32) -> Self {
        Self {
            current: initial,
            fade: None,
            duration: duration_secs.max(f32::EPSILON),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Switch the current layer, starting a fade from the old one. A
    /// retarget mid-fade drops the stale previous layer outright rather
    /// than tracking a three-way blend.
    pub fn retarget(&mut self, index: usize) {
        if index == self.current {
            return;
        }
        self.fade = Some(Fade {
            from: self.current,
            remaining: self.duration,
        });
        self.current = index;
    }

    /// Advance an in-flight fade by one frame.
    pub fn tick(&mut self, dt_sec: f32) {
        if let Some(fade) = &mut self.fade {
            fade.remaining -= dt_sec.max(0.0);
            if fade.remaining <= 0.0 {
                self.fade = None;
            }
        }
    }

    /// Blend weight for one layer: the current layer ramps in while the
    /// fading previous layer ramps out; everything else is 0.
    pub fn layer_opacity(&self, layer: usize) -> f32 {
        match self.fade {
            Some(fade) if layer == fade.from => (fade.remaining / self.duration).clamp(0.0, 1.0),
            _ if layer == self.current => match self.fade {
                Some(fade) => 1.0 - (fade.remaining / self.duration).clamp(0.0, 1.0),
                None => 1.0,
            },
            _ => 0.0,
        }
    }

    /// Whether this layer's media should be playing.
    #[inline]
    pub fn is_current(&self, layer: usize) -> bool {
        layer == self.current
    }
}

/// Continuous vertical drift of the background stack as a function of
/// progress, independent of index changes.
#[inline]
pub fn parallax_offset_px(progress: f32, cfg: &SceneConfig) -> f32 {
    -cfg.parallax_strength_px * progress.clamp(0.0, 1.0)
}
