//! Floating decorative particles behind the landing page.
//!
//! A fixed-size slot arena keeps exactly [`PARTICLE_COUNT`] elements
//! alive inside `#particles-container`. Each slot schedules its own
//! expiry; when the timer fires the old element is detached and a fresh
//! one spawns into the same slot, so the pool never shrinks. A
//! `requestAnimationFrame` loop additionally teleports anything that
//! drifted past the viewport bottom back to the top.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::rng::Rng;

pub const PARTICLE_COUNT: usize = 15;
pub const PARTICLE_LIFETIME_MS: i32 = 8_000;
pub const PARTICLE_KINDS: [&str; 3] = ["sword", "diamond", "block"];

/// Vertical respawn position for elements that fell past the viewport.
const RESPAWN_TOP_PX: f64 = -20.0;

/// Randomized creation parameters for one particle element.
pub struct ParticleSpec {
    pub kind: &'static str,
    pub left_px: f64,
    pub top_px: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleSpec {
    /// Uniform position over the viewport, start delay in 0-6s,
    /// animation duration in 4-8s, one of three visual kinds.
    pub fn sample(rng: &mut Rng, viewport_w: f64, viewport_h: f64) -> Self {
        ParticleSpec {
            kind: *rng.pick(&PARTICLE_KINDS),
            left_px: rng.next_f64() * viewport_w,
            top_px: rng.next_f64() * viewport_h,
            delay_s: rng.range(0.0, 6.0),
            duration_s: rng.range(4.0, 8.0),
        }
    }

    pub fn class_name(&self) -> String {
        format!("particle {}", self.kind)
    }
}

struct ParticleField {
    container: Element,
    slots: Vec<HtmlElement>,
    rng: Rng,
}

thread_local! {
    static FIELD: RefCell<Option<ParticleField>> = RefCell::new(None);
}

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    let Some(container) = doc.get_element_by_id("particles-container") else {
        return Ok(());
    };
    let mut field = ParticleField {
        container,
        slots: Vec::with_capacity(PARTICLE_COUNT),
        rng: Rng::from_clock(),
    };
    for _ in 0..PARTICLE_COUNT {
        let el = spawn(doc, &field.container, &mut field.rng)?;
        field.slots.push(el);
    }
    FIELD.with(|cell| cell.replace(Some(field)));
    for idx in 0..PARTICLE_COUNT {
        schedule_expiry(idx);
    }
    start_drift_loop();
    Ok(())
}

fn spawn(doc: &Document, container: &Element, rng: &mut Rng) -> Result<HtmlElement, JsValue> {
    let win = dom::window()?;
    let (vw, vh) = dom::viewport(&win);
    let spec = ParticleSpec::sample(rng, vw, vh);
    let el = dom::create_div(doc)?;
    el.set_class_name(&spec.class_name());
    let style = el.style();
    style.set_property("left", &format!("{:.0}px", spec.left_px))?;
    style.set_property("top", &format!("{:.0}px", spec.top_px))?;
    style.set_property("animation-delay", &format!("{:.2}s", spec.delay_s))?;
    style.set_property("animation-duration", &format!("{:.2}s", spec.duration_s))?;
    container.append_child(&el)?;
    Ok(el)
}

fn schedule_expiry(idx: usize) {
    dom::set_timeout(move || recycle(idx), PARTICLE_LIFETIME_MS);
}

/// Expiry step for one slot: detach the old element and respawn into the
/// same slot within the same tick. If the element is already detached
/// (page teardown) the slot goes dormant instead.
fn recycle(idx: usize) {
    let respawned = FIELD.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(field) = borrow.as_mut() else {
            return false;
        };
        let Some(old) = field.slots.get(idx) else {
            return false;
        };
        if old.parent_node().is_none() {
            return false;
        }
        old.remove();
        let Ok(doc) = dom::document() else {
            return false;
        };
        match spawn(&doc, &field.container, &mut field.rng) {
            Ok(fresh) => {
                field.slots[idx] = fresh;
                true
            }
            Err(_) => false,
        }
    });
    if respawned {
        schedule_expiry(idx);
    }
}

fn start_drift_loop() {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        FIELD.with(|cell| {
            if let Some(field) = cell.borrow_mut().as_mut() {
                drift_tick(field);
            }
        });
        if let Some(w) = web_sys::window() {
            let _ = w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web_sys::window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Cosmetic fallback for elements the expiry timer has not caught yet:
/// anything below the viewport bottom teleports to the top at a fresh
/// random horizontal position.
fn drift_tick(field: &mut ParticleField) {
    let Ok(win) = dom::window() else { return };
    let (vw, vh) = dom::viewport(&win);
    for el in &field.slots {
        let rect = el.get_bounding_client_rect();
        if rect.top() > vh {
            let style = el.style();
            style
                .set_property("top", &format!("{RESPAWN_TOP_PX:.0}px"))
                .ok();
            style
                .set_property("left", &format!("{:.0}px", field.rng.next_f64() * vw))
                .ok();
        }
    }
}
