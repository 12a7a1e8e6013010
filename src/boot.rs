//! Boot chrome: the full-viewport loading overlay and the delayed
//! welcome toast.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::dom;

pub const WELCOME_NOTICE: &str = "\u{1f3ae} Welcome to Cube Network! Scroll down to explore.";

pub const LOADER_HOLD_MS: i32 = 1_000;
pub const LOADER_FADE_MS: i32 = 500;
pub const WELCOME_DELAY_MS: i32 = 2_000;
pub const WELCOME_VISIBLE_MS: i32 = 5_000;
pub const WELCOME_EXIT_MS: i32 = 500;

const LOADER_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    background: linear-gradient(135deg, #0a0a0a 0%, #1a1a2e 50%, #16213e 100%); \
    display: flex; justify-content: center; align-items: center; z-index: 10000; \
    transition: opacity 0.5s ease;";

const LOADER_HTML: &str = r#"
<div style="
    font-family: 'Press Start 2P', monospace;
    color: #00ffff;
    font-size: 2rem;
    text-align: center;
    animation: glow 1s ease-in-out infinite alternate;
">
    <div style="margin-bottom: 1rem;">&#9889; CUBE NETWORK &#9889;</div>
    <div style="font-size: 1rem; color: #cccccc;">Loading your adventure...</div>
</div>
"#;

const WELCOME_CSS: &str = "position: fixed; bottom: 20px; left: 50%; \
    transform: translateX(-50%); background: rgba(0, 0, 0, 0.9); color: #00ffff; \
    padding: 1rem 2rem; border-radius: 8px; border: 2px solid #00ffff; \
    z-index: 10000; font-family: 'Orbitron', monospace; font-weight: 600; \
    animation: slideIn 0.5s ease-out; text-align: center;";

const FADE_OUT_CSS: &str = r#"
@keyframes fadeOut {
    from { opacity: 1; }
    to { opacity: 0; }
}
"#;

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    dom::inject_css(doc, FADE_OUT_CSS)?;
    show_loader(doc)?;
    schedule_welcome(doc);
    Ok(())
}

fn show_loader(doc: &Document) -> Result<(), JsValue> {
    let loader = dom::create_div(doc)?;
    loader.style().set_css_text(LOADER_CSS);
    loader.set_inner_html(LOADER_HTML);
    dom::body(doc)?.append_child(&loader)?;

    // The module is often instantiated after the load event already
    // fired; a listener alone would strand the overlay.
    if doc.ready_state() == "complete" {
        dismiss_loader(loader);
    } else {
        let cb = Closure::once(move || dismiss_loader(loader));
        dom::window()?.add_event_listener_with_callback("load", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

fn dismiss_loader(loader: HtmlElement) {
    dom::set_timeout(
        move || {
            loader.style().set_property("opacity", "0").ok();
            dom::set_timeout(
                move || {
                    if loader.parent_node().is_some() {
                        loader.remove();
                    }
                },
                LOADER_FADE_MS,
            );
        },
        LOADER_HOLD_MS,
    );
}

fn schedule_welcome(doc: &Document) {
    let doc = doc.clone();
    dom::set_timeout(
        move || {
            let Ok(body) = dom::body(&doc) else { return };
            let Ok(el) = dom::create_div(&doc) else { return };
            el.set_text_content(Some(WELCOME_NOTICE));
            el.style().set_css_text(WELCOME_CSS);
            if body.append_child(&el).is_err() {
                return;
            }
            dom::set_timeout(
                move || {
                    el.style()
                        .set_property("animation", "fadeOut 0.5s ease-in forwards")
                        .ok();
                    dom::set_timeout(
                        move || {
                            if el.parent_node().is_some() {
                                el.remove();
                            }
                        },
                        WELCOME_EXIT_MS,
                    );
                },
                WELCOME_VISIBLE_MS,
            );
        },
        WELCOME_DELAY_MS,
    );
}
