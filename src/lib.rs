//! Cube Network landing page effects.
//!
//! Seven cosmetic subsystems wire themselves against the live document
//! once at startup: the floating particle field, the custom cursor and
//! its trail, the simulated music toggle, smooth anchor scrolling, the
//! interactive reveal/highlight/scroll-reveal behaviors, the mobile
//! menu, and the lazy-image / reduced-motion helpers. `start_effects()`
//! is the JS entrypoint; `copy_server_ip()` stays reachable from markup.
//!
//! The pure state machines and sampling logic are exported for native
//! testing; everything browser-facing lives behind them.

use wasm_bindgen::prelude::*;

mod boot;
mod cursor;
mod dom;
mod interact;
mod music;
mod nav;
mod notify;
mod particles;
mod perf;
mod rng;
mod scroll;

pub use boot::WELCOME_NOTICE;
pub use cursor::{CURSOR_GLYPH, CURSOR_HOVER_GLYPH, TRAIL_LIFETIME_MS, TRAIL_PROBABILITY, hover_transform};
pub use interact::{COPY_FAIL_NOTICE, COPY_OK_NOTICE, REVEAL_NOTICE};
pub use music::{MUSIC_TOAST_MS, Playback};
pub use nav::MenuState;
pub use notify::{TOAST_EXIT_MS, TOAST_VISIBLE_MS};
pub use particles::{PARTICLE_COUNT, PARTICLE_KINDS, PARTICLE_LIFETIME_MS, ParticleSpec};
pub use perf::should_reduce_motion;
pub use rng::Rng;
pub use scroll::{HEADER_OFFSET_PX, scroll_target_top};

/// The address shown on the landing page and copied by [`copy_server_ip`].
pub const SERVER_IP: &str = "play.cubenetwork.fun";

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wire every subsystem against the current document. Subsystems whose
/// host elements are missing skip themselves; a missing document is the
/// only hard error.
#[wasm_bindgen]
pub fn start_effects() -> Result<(), JsValue> {
    let doc = dom::document()?;
    particles::setup(&doc)?;
    cursor::setup(&doc)?;
    music::setup(&doc)?;
    scroll::setup(&doc)?;
    interact::setup(&doc)?;
    nav::setup(&doc)?;
    perf::setup(&doc)?;
    boot::setup(&doc)?;
    web_sys::console::log_1(&"cube-landing: effects online".into());
    Ok(())
}

/// Global clipboard entry point, invocable from markup.
#[wasm_bindgen]
pub fn copy_server_ip() {
    interact::copy_ip(SERVER_IP);
}
