//! Interactive page behaviors: the server-IP reveal, hover highlights,
//! one-shot scroll reveals and the clipboard copy path.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, HtmlElement, HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::notify;

pub const REVEAL_NOTICE: &str =
    "\u{1f4cb} Server IP revealed! Click \"Copy IP\" to copy to clipboard.";
pub const COPY_OK_NOTICE: &str = "\u{2705} Server IP copied to clipboard!";
pub const COPY_FAIL_NOTICE: &str = "\u{274c} Failed to copy IP. Please copy manually.";

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const FX_CSS: &str = r#"
@keyframes fadeInUp {
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes slideIn {
    from {
        transform: translateX(100%);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}

@keyframes slideOut {
    from {
        transform: translateX(0);
        opacity: 1;
    }
    to {
        transform: translateX(100%);
        opacity: 0;
    }
}
"#;

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    setup_reveal(doc)?;
    setup_hover_highlight(doc)?;
    setup_scroll_reveal(doc)?;
    Ok(())
}

/// Clicking the play button flips the server-IP panel; each reveal (not
/// hide) fires the glow animation and a toast.
fn setup_reveal(doc: &Document) -> Result<(), JsValue> {
    let (Some(play_btn), Some(server_ip)) = (
        doc.get_element_by_id("play-btn"),
        doc.get_element_by_id("server-ip"),
    ) else {
        return Ok(());
    };
    let cb = Closure::wrap(Box::new(move || {
        server_ip.class_list().toggle("hidden").ok();
        if !server_ip.class_list().contains("hidden") {
            if let Some(el) = server_ip.dyn_ref::<HtmlElement>() {
                el.style()
                    .set_property("animation", "glow 1s ease-in-out")
                    .ok();
            }
            notify::toast(REVEAL_NOTICE, notify::TOAST_VISIBLE_MS);
        }
    }) as Box<dyn FnMut()>);
    play_btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn setup_hover_highlight(doc: &Document) -> Result<(), JsValue> {
    dom::for_each_selected(doc, ".btn, .vote-btn, .rank-card", |el| {
        let Some(el) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        let enter_el = el.clone();
        let enter = Closure::wrap(Box::new(move || {
            enter_el.style().set_property("filter", "brightness(1.2)").ok();
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())
            .ok();
        enter.forget();

        let leave_el = el.clone();
        let leave = Closure::wrap(Box::new(move || {
            leave_el.style().set_property("filter", "brightness(1)").ok();
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())
            .ok();
        leave.forget();
    })
}

/// Sections start hidden and offset; the first intersection animates
/// them into place and detaches the observer from that section.
fn setup_scroll_reveal(doc: &Document) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    el.style()
                        .set_property("animation", "fadeInUp 0.8s ease-out forwards")
                        .ok();
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();

    dom::for_each_selected(doc, "section", |section| {
        if let Some(el) = section.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("opacity", "0").ok();
            style.set_property("transform", "translateY(50px)").ok();
        }
        observer.observe(section);
    })?;
    dom::inject_css(doc, FX_CSS)
}

/// Copy `text` to the clipboard: async clipboard API when the platform
/// has one, legacy selection-and-copy otherwise. Exactly one of the two
/// paths reports, via toast.
pub(crate) fn copy_ip(text: &'static str) {
    let Ok(win) = dom::window() else { return };
    let nav = win.navigator();
    let has_async_clipboard = js_sys::Reflect::get(nav.as_ref(), &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if has_async_clipboard {
        let promise = nav.clipboard().write_text(text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => notify::toast(COPY_OK_NOTICE, notify::TOAST_VISIBLE_MS),
                Err(_) => fallback_copy(text),
            }
        });
    } else {
        fallback_copy(text);
    }
}

/// Offscreen-textarea fallback around the deprecated `execCommand`.
fn fallback_copy(text: &str) {
    let Ok(doc) = dom::document() else { return };
    let Ok(body) = dom::body(&doc) else { return };
    let Ok(el) = doc.create_element("textarea") else {
        return;
    };
    let Ok(area) = el.dyn_into::<HtmlTextAreaElement>() else {
        return;
    };
    area.set_value(text);
    let style = area.style();
    style.set_property("position", "fixed").ok();
    style.set_property("left", "-999999px").ok();
    style.set_property("top", "-999999px").ok();
    if body.append_child(&area).is_err() {
        return;
    }
    let _ = area.focus();
    area.select();
    let copied = doc
        .dyn_ref::<web_sys::HtmlDocument>()
        .map(|d| d.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    if copied {
        notify::toast(COPY_OK_NOTICE, notify::TOAST_VISIBLE_MS);
    } else {
        notify::toast(COPY_FAIL_NOTICE, notify::TOAST_VISIBLE_MS);
    }
    area.remove();
}
