//! Performance helpers: lazy image loading and a reduced-motion clamp
//! for low-core-count devices.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

/// Reduce animations when the platform reports a positive logical
/// processor count below this.
pub const REDUCED_MOTION_CORES: f64 = 4.0;

const REDUCED_MOTION_CSS: &str = r#"
.reduced-motion * {
    animation-duration: 0.1s !important;
    transition-duration: 0.1s !important;
}
"#;

pub fn should_reduce_motion(logical_cores: f64) -> bool {
    logical_cores > 0.0 && logical_cores < REDUCED_MOTION_CORES
}

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    setup_lazy_images(doc)?;
    setup_reduced_motion(doc)?;
    Ok(())
}

/// Images carrying `data-src` defer loading until first visibility;
/// each promotion is one-shot.
fn setup_lazy_images(doc: &Document) -> Result<(), JsValue> {
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
                if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                    }
                    img.class_list().remove_1("lazy").ok();
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new(cb.as_ref().unchecked_ref())?;
    cb.forget();

    dom::for_each_selected(doc, "img[data-src]", |img| {
        observer.observe(img);
    })
}

fn setup_reduced_motion(doc: &Document) -> Result<(), JsValue> {
    let win = dom::window()?;
    let cores = win.navigator().hardware_concurrency();
    if !should_reduce_motion(cores) {
        return Ok(());
    }
    dom::body(doc)?.class_list().add_1("reduced-motion")?;
    dom::inject_css(doc, REDUCED_MOTION_CSS)
}
