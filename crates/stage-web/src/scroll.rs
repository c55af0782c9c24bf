//! Scroll input capture for the pinned region.
//!
//! The stage owns its scroll: wheel and touch deltas are intercepted and
//! fed into the shared [`ProgressTracker`] instead of moving the document,
//! which is what lets the frame loop derive a smoothed progress value.

use stage_core::{PinRegion, ProgressTracker, SceneConfig};
use stage_core::{TOUCH_DRAG_MULTIPLIER, WHEEL_LINE_PX, WHEEL_PAGE_PX};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Recompute the pin region from the current viewport and resize the
/// tracker's travel to match. Called at startup and on every resize.
pub fn sync_region(
    window: &web::Window,
    cfg: &SceneConfig,
    region: &Rc<RefCell<PinRegion>>,
    tracker: &Rc<RefCell<ProgressTracker>>,
) {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        .max(1.0);
    let next = PinRegion::for_scene(cfg, viewport_height, 0.0);
    tracker.borrow_mut().set_max_offset(next.pin_end());
    *region.borrow_mut() = next;
}

/// Normalize a wheel delta to pixels regardless of the event's delta mode.
#[inline]
fn wheel_delta_px(ev: &web::WheelEvent) -> f64 {
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => ev.delta_y() * WHEEL_LINE_PX,
        web::WheelEvent::DOM_DELTA_PAGE => ev.delta_y() * WHEEL_PAGE_PX,
        _ => ev.delta_y(),
    }
}

pub fn attach_input_listeners(window: &web::Window, tracker: Rc<RefCell<ProgressTracker>>) {
    // Wheel. Registered non-passive so the stage can keep the document
    // from scrolling underneath it.
    {
        let tracker = tracker.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            tracker.borrow_mut().add_delta(wheel_delta_px(&ev));
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }

    // Touch drag. The last touch Y is shared between the start and move
    // handlers; a finger moving up drives progress forward.
    let last_touch_y = Rc::new(RefCell::new(None::<f64>));
    {
        let last_touch_y = last_touch_y.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                *last_touch_y.borrow_mut() = Some(touch.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                let y = touch.client_y() as f64;
                let mut last = last_touch_y.borrow_mut();
                if let Some(prev) = *last {
                    tracker
                        .borrow_mut()
                        .add_delta((prev - y) * TOUCH_DRAG_MULTIPLIER);
                }
                *last = Some(y);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}

pub fn attach_resize_listener(
    window: &web::Window,
    cfg: SceneConfig,
    region: Rc<RefCell<PinRegion>>,
    tracker: Rc<RefCell<ProgressTracker>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            sync_region(&w, &cfg, &region, &tracker);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
