use stage_core::VisualState;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
pub fn collect_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Write a derived [`VisualState`] to an element's inline style. Writes
/// are idempotent per frame; every value is derived fresh from progress,
/// so last write wins.
pub fn apply_visual_state(el: &web::HtmlElement, vs: &VisualState) {
    let style = el.style();
    let _ = style.set_property("opacity", &format!("{:.4}", vs.opacity));
    let _ = style.set_property(
        "transform",
        &format!(
            "translateY({:.2}px) scale({:.4})",
            vs.translate_y_px, vs.scale
        ),
    );
    if vs.blur_px > 0.0 {
        let _ = style.set_property("filter", &format!("blur({:.2}px)", vs.blur_px));
    } else {
        let _ = style.set_property("filter", "none");
    }
    let _ = style.set_property(
        "pointer-events",
        if vs.pointer_events { "auto" } else { "none" },
    );
    let _ = style.set_property("z-index", &vs.z_index.to_string());
}

/// Opacity plus a vertical parallax transform, for background layers.
pub fn apply_layer_style(el: &web::HtmlElement, opacity: f32, translate_y_px: f32) {
    let style = el.style();
    let _ = style.set_property("opacity", &format!("{:.4}", opacity));
    let _ = style.set_property("transform", &format!("translateY({:.2}px)", translate_y_px));
}
