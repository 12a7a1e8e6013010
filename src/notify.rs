//! Transient toast messages: slide in, hold, slide out, detach.

use crate::dom;

/// Default hold time before the exit animation starts.
pub const TOAST_VISIBLE_MS: i32 = 3_000;
/// Duration of the `slideOut` exit animation.
pub const TOAST_EXIT_MS: i32 = 300;

const TOAST_CSS: &str = "position: fixed; top: 100px; right: 20px; \
    background: rgba(0, 0, 0, 0.9); color: #00ffff; padding: 1rem 2rem; \
    border-radius: 8px; border: 2px solid #00ffff; z-index: 10000; \
    font-family: 'Orbitron', monospace; font-weight: 600; \
    animation: slideIn 0.3s ease-out;";

/// Show `message` for `visible_ms`, then animate out and remove.
/// Failures here are cosmetic; nothing propagates.
pub(crate) fn toast(message: &str, visible_ms: i32) {
    let Ok(doc) = dom::document() else { return };
    let Ok(body) = dom::body(&doc) else { return };
    let Ok(el) = dom::create_div(&doc) else { return };
    el.set_text_content(Some(message));
    el.style().set_css_text(TOAST_CSS);
    if body.append_child(&el).is_err() {
        return;
    }
    dom::set_timeout(
        move || {
            el.style()
                .set_property("animation", "slideOut 0.3s ease-in forwards")
                .ok();
            dom::set_timeout(
                move || {
                    if el.parent_node().is_some() {
                        el.remove();
                    }
                },
                TOAST_EXIT_MS,
            );
        },
        visible_ms,
    );
}
