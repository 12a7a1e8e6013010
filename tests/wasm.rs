// Browser smoke tests; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_effects_tolerates_a_bare_document() {
    // No navbar, no music button, no particles container: every
    // subsystem skips itself rather than failing.
    assert!(cube_landing::start_effects().is_ok());
}

#[wasm_bindgen_test]
fn particle_pool_fills_to_capacity() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let container = doc.create_element("div").unwrap();
    container.set_id("particles-container");
    doc.body().unwrap().append_child(&container).unwrap();
    cube_landing::start_effects().unwrap();
    assert_eq!(
        container.child_element_count() as usize,
        cube_landing::PARTICLE_COUNT
    );
}
