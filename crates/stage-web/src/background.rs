//! Full-bleed background layers behind the sections.
//!
//! A single subscriber drives the whole stack: active-index changes start
//! a cross-fade, every tick advances it and applies per-layer opacity plus
//! a continuous parallax drift, and playback is reconciled so only the
//! current layer's video decodes.

use crate::dom;
use instant::Instant;
use stage_core::{parallax_offset_px, Broadcaster, Crossfade, SceneConfig, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct BackgroundStack {
    layers: Vec<web::HtmlElement>,
    videos: Vec<Option<web::HtmlVideoElement>>,
    fade: Crossfade,
    cfg: SceneConfig,
    last_instant: Instant,
    last_index: usize,
    // Reused rejection handler: a refused autoplay degrades to a static
    // frame, never an error.
    autoplay_guard: Closure<dyn FnMut(JsValue)>,
}

impl BackgroundStack {
    fn new(layers: Vec<web::HtmlElement>, cfg: SceneConfig) -> Self {
        let videos = layers
            .iter()
            .map(|layer| {
                if let Some(v) = layer.dyn_ref::<web::HtmlVideoElement>() {
                    return Some(v.clone());
                }
                layer
                    .query_selector("video")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
            })
            .collect();
        Self {
            layers,
            videos,
            fade: Crossfade::new(0, cfg.crossfade_secs),
            cfg,
            last_instant: Instant::now(),
            last_index: 0,
            autoplay_guard: Closure::wrap(Box::new(|_: JsValue| {}) as Box<dyn FnMut(JsValue)>),
        }
    }

    fn on_tick(&mut self, progress: f32, active_index: usize) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if active_index != self.last_index {
            self.last_index = active_index;
            // More sections than layers is fine; the extras share the last layer.
            let layer = active_index.min(self.layers.len().saturating_sub(1));
            if !self.fade.is_current(layer) {
                log::debug!("[bg] crossfade -> layer {layer}");
                self.fade.retarget(layer);
                self.sync_playback();
            }
        }
        self.fade.tick(dt_sec);

        let drift = parallax_offset_px(progress, &self.cfg);
        for (i, layer) in self.layers.iter().enumerate() {
            dom::apply_layer_style(layer, self.fade.layer_opacity(i), drift);
        }
    }

    fn sync_playback(&self) {
        for (i, video) in self.videos.iter().enumerate() {
            let Some(video) = video else { continue };
            if self.fade.is_current(i) {
                if let Ok(promise) = video.play() {
                    let _ = promise.catch(&self.autoplay_guard);
                }
            } else {
                let _ = video.pause();
            }
        }
    }
}

/// Collect the layer elements and subscribe the stack to the broadcaster.
/// A page with no layers just skips the background system.
pub fn mount(
    document: &web::Document,
    broadcaster: &Broadcaster,
    cfg: SceneConfig,
) -> Option<Subscription> {
    let layers = dom::collect_elements(document, "[data-stage-layer]");
    if layers.is_empty() {
        log::info!("[bg] no background layers found");
        return None;
    }
    log::info!("[bg] {} layers", layers.len());
    let stack = Rc::new(RefCell::new(BackgroundStack::new(layers, cfg)));
    stack.borrow().sync_playback();
    Some(broadcaster.register(move |progress, index| {
        stack.borrow_mut().on_tick(progress, index);
    }))
}
