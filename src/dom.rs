//! Shared browser plumbing: accessors, timers, CSS injection.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub(crate) fn body(doc: &Document) -> Result<HtmlElement, JsValue> {
    doc.body().ok_or_else(|| JsValue::from_str("no body"))
}

pub(crate) fn create_div(doc: &Document) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element("div")?.dyn_into::<HtmlElement>()?)
}

/// Append a `<style>` element carrying `css` to the document head.
pub(crate) fn inject_css(doc: &Document, css: &str) -> Result<(), JsValue> {
    let style = doc.create_element("style")?;
    style.set_text_content(Some(css));
    let head = doc.head().ok_or_else(|| JsValue::from_str("no head"))?;
    head.append_child(&style)?;
    Ok(())
}

pub(crate) fn viewport(win: &Window) -> (f64, f64) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// One-shot timer. `once_into_js` frees the closure after it fires, so
/// repeatedly spawned timeouts (trail marks, particle expiries) do not
/// accumulate leaked closures.
pub(crate) fn set_timeout(f: impl FnOnce() + 'static, ms: i32) {
    let cb = Closure::once_into_js(f);
    if let Ok(win) = window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

pub(crate) fn for_each_selected(
    doc: &Document,
    selector: &str,
    mut f: impl FnMut(&Element),
) -> Result<(), JsValue> {
    let list = doc.query_selector_all(selector)?;
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                f(&el);
            }
        }
    }
    Ok(())
}
