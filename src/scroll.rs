//! Smooth scrolling for in-page anchors.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Fixed navbar height subtracted from every scroll target.
pub const HEADER_OFFSET_PX: i32 = 80;

pub fn scroll_target_top(offset_top: i32) -> f64 {
    f64::from(offset_top - HEADER_OFFSET_PX)
}

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    let win = dom::window()?;
    dom::for_each_selected(doc, "a[href^=\"#\"]", |link| {
        let anchor = link.clone();
        let doc = doc.clone();
        let win = win.clone();
        let cb = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            // A bare "#" or a dangling id resolves to nothing: no-op.
            let Some(target) = doc.query_selector(&href).ok().flatten() else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            let opts = ScrollToOptions::new();
            opts.set_top(scroll_target_top(target.offset_top()));
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        }) as Box<dyn FnMut(Event)>);
        link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .ok();
        cb.forget();
    })
}
