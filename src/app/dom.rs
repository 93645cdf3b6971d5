use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, HtmlElement, MouseEvent};

use crate::effects::{hover::pointer_offset, navigation::SectionBounds};

/// Measures every `section[id]` in document order.
pub fn measure_sections() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds::new(el.id(), el.offset_top() as f64, el.offset_height() as f64))
        .collect()
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document().get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("couldn't set {property} on #{}: {e:?}", el.id());
    }
}

/// Feeds the card's glow the pointer position it was entered at.
pub fn track_pointer(ev: &MouseEvent, card: &HtmlElement) {
    let rect = card.get_bounding_client_rect();
    let (x, y) = pointer_offset(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    );
    set_style(card, "--mouse-x", &format!("{x}px"));
    set_style(card, "--mouse-y", &format!("{y}px"));
}

/// Runs `check` once the page has finished loading, whether that happened
/// before or after hydration. Images that failed while the bundle was still
/// downloading fired `error` before any `on:error` handler existed.
pub fn on_page_loaded(check: impl Fn() + Clone + 'static) {
    let on_load = check.clone();
    // listener is removed with the owning component
    use_event_listener(use_window(), ev::load, move |_| on_load());
    Effect::new(move |_| {
        if document().ready_state() == "complete" {
            check();
        }
    });
}

pub fn viewport_height() -> Option<f64> {
    window().inner_height().ok()?.as_f64()
}

pub fn greet_console() {
    let lines = [
        (
            "%c👋 Hello, fellow developer!",
            "font-size: 20px; font-weight: bold; color: #00d4ff;",
        ),
        (
            "%cWelcome to my portfolio. Feel free to explore the code!",
            "font-size: 14px; color: #8892b0;",
        ),
        (
            "%c🦀 Built with passion using Rust, Leptos and WebAssembly",
            "font-size: 12px; color: #5a6380;",
        ),
    ];
    for (text, style) in lines {
        console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}
