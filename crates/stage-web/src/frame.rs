//! The frame loop: one `requestAnimationFrame` ticker advances the scroll
//! smoothing, derives `(progress, active_index)`, and publishes to every
//! registered subscriber. Tearing the loop down (page navigation) just
//! stops rescheduling; nothing fires after that.

use instant::Instant;
use stage_core::{active_index, Broadcaster, PinRegion, ProgressTracker, SceneConfig, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub cfg: SceneConfig,
    pub tracker: Rc<RefCell<ProgressTracker>>,
    pub region: Rc<RefCell<PinRegion>>,
    pub broadcaster: Broadcaster,
    pub last_instant: Instant,
    // Keeps the section and background subscriptions alive for the life
    // of the loop; dropping one would silently stop its updates.
    pub subscriptions: Vec<Subscription>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let offset = self.tracker.borrow_mut().step(dt_sec);
        let progress = self.region.borrow().progress_for_offset(offset);
        let index = active_index(progress, self.cfg.total_states);
        self.broadcaster.publish(progress, index);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
