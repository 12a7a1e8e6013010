//! Custom cursor glyph with a fading trail.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent};

use crate::dom;
use crate::rng::Rng;

pub const CURSOR_GLYPH: &str = "\u{2694}\u{fe0f}"; // ⚔️
pub const CURSOR_HOVER_GLYPH: &str = "\u{1f48e}"; // 💎
/// Chance of dropping a trail mark per pointer-move event.
pub const TRAIL_PROBABILITY: f64 = 0.3;
pub const TRAIL_LIFETIME_MS: i32 = 500;

/// Glyph scaling for interactive-element hover, restored symmetrically
/// on leave.
pub fn hover_transform(hovering: bool) -> &'static str {
    if hovering {
        "translate(-50%, -50%) scale(1.5)"
    } else {
        "translate(-50%, -50%) scale(1)"
    }
}

const CURSOR_CSS: &str = r#"
.custom-cursor {
    position: fixed;
    width: 30px;
    height: 30px;
    pointer-events: none;
    z-index: 9999;
    font-size: 20px;
    transform: translate(-50%, -50%);
    transition: all 0.1s ease;
    mix-blend-mode: difference;
}

body {
    cursor: none;
}

.cursor-trail {
    position: fixed;
    width: 8px;
    height: 8px;
    background: radial-gradient(circle, #00ffff, transparent);
    border-radius: 50%;
    pointer-events: none;
    z-index: 9998;
    animation: trailFade 0.5s ease-out forwards;
}

@keyframes trailFade {
    0% { opacity: 1; transform: scale(1); }
    100% { opacity: 0; transform: scale(0); }
}
"#;

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    let body = dom::body(doc)?;
    let cursor = dom::create_div(doc)?;
    cursor.set_class_name("custom-cursor");
    cursor.set_inner_html(CURSOR_GLYPH);
    body.append_child(&cursor)?;
    dom::inject_css(doc, CURSOR_CSS)?;

    // Track the pointer at native event rate; occasionally drop a trail mark.
    let rng = Rc::new(RefCell::new(Rng::from_clock()));
    {
        let glyph = cursor.clone();
        let trail_doc = doc.clone();
        let mousemove = Closure::wrap(Box::new(move |e: MouseEvent| {
            let style = glyph.style();
            style.set_property("left", &format!("{}px", e.client_x())).ok();
            style.set_property("top", &format!("{}px", e.client_y())).ok();
            if rng.borrow_mut().chance(TRAIL_PROBABILITY) {
                spawn_trail(&trail_doc, e.client_x(), e.client_y());
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        doc.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }

    // Swap the glyph over interactive elements.
    dom::for_each_selected(doc, "button, a, .btn", |el| {
        let enter_cursor = cursor.clone();
        let enter = Closure::wrap(Box::new(move || {
            enter_cursor.set_inner_html(CURSOR_HOVER_GLYPH);
            enter_cursor
                .style()
                .set_property("transform", hover_transform(true))
                .ok();
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())
            .ok();
        enter.forget();

        let leave_cursor = cursor.clone();
        let leave = Closure::wrap(Box::new(move || {
            leave_cursor.set_inner_html(CURSOR_GLYPH);
            leave_cursor
                .style()
                .set_property("transform", hover_transform(false))
                .ok();
        }) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())
            .ok();
        leave.forget();
    })?;
    Ok(())
}

fn spawn_trail(doc: &Document, x: i32, y: i32) {
    let Ok(body) = dom::body(doc) else { return };
    let Ok(trail) = dom::create_div(doc) else { return };
    trail.set_class_name("cursor-trail");
    let style = trail.style();
    style.set_property("left", &format!("{x}px")).ok();
    style.set_property("top", &format!("{y}px")).ok();
    if body.append_child(&trail).is_err() {
        return;
    }
    dom::set_timeout(
        move || {
            if trail.parent_node().is_some() {
                trail.remove();
            }
        },
        TRAIL_LIFETIME_MS,
    );
}
