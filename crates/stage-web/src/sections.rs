//! One subscriber per section element: derive the section's window for the
//! published progress and write it straight to the element's inline style,
//! bypassing any retained rendering for per-frame cost.

use crate::dom;
use stage_core::{compute_window, Broadcaster, SceneConfig, Subscription};
use web_sys as web;

pub fn mount(
    broadcaster: &Broadcaster,
    elements: Vec<web::HtmlElement>,
    cfg: SceneConfig,
) -> Vec<Subscription> {
    elements
        .into_iter()
        .enumerate()
        .map(|(index, el)| {
            let cfg = cfg.clone();
            broadcaster.register(move |progress, _active| {
                let vs = compute_window(index, progress, &cfg);
                dom::apply_visual_state(&el, &vs);
            })
        })
        .collect()
}
