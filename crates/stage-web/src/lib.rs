#![cfg(target_arch = "wasm32")]
//! Browser entry point: find the stage markup, wire scroll input, mount
//! the section renderers and background stack, and start the frame loop.
//!
//! Expected markup: a `#stage` container, section elements tagged
//! `data-stage-section`, and optional full-bleed `data-stage-layer`
//! elements (plain, image, or video) behind them.

mod background;
mod dom;
mod frame;
mod scroll;
mod sections;

use instant::Instant;
use stage_core::{Broadcaster, PinRegion, ProgressTracker, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {e:?}");
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    document
        .get_element_by_id("stage")
        .ok_or_else(|| anyhow::anyhow!("missing #stage"))?;

    let section_els = dom::collect_elements(&document, "[data-stage-section]");
    let mut cfg = SceneConfig::default();
    if !section_els.is_empty() {
        // The DOM is the source of truth for how many sections exist.
        cfg.total_states = section_els.len();
    }
    cfg.validate()
        .map_err(|e| anyhow::anyhow!("scene config: {e}"))?;
    log::info!(
        "[stage] {} sections, overlap {:.2}",
        cfg.total_states,
        cfg.overlap_fraction
    );

    let tracker = Rc::new(RefCell::new(ProgressTracker::new(0.0)));
    let region = Rc::new(RefCell::new(PinRegion::for_scene(&cfg, 1.0, 0.0)));
    scroll::sync_region(&window, &cfg, &region, &tracker);
    scroll::attach_input_listeners(&window, tracker.clone());
    scroll::attach_resize_listener(&window, cfg.clone(), region.clone(), tracker.clone());

    let broadcaster = Broadcaster::new();
    let mut subscriptions = sections::mount(&broadcaster, section_els, cfg.clone());
    if let Some(sub) = background::mount(&document, &broadcaster, cfg.clone()) {
        subscriptions.push(sub);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        cfg,
        tracker,
        region,
        broadcaster,
        last_instant: Instant::now(),
        subscriptions,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
