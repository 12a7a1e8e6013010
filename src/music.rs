//! Simulated background-music toggle. No media element exists; the
//! state machine drives the button chrome and a toast only.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::notify;

/// Hold time for the music toasts (shorter than the general default).
pub const MUSIC_TOAST_MS: i32 = 2_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Playback {
    Stopped,
    Playing,
}

impl Playback {
    pub fn toggled(self) -> Self {
        match self {
            Playback::Stopped => Playback::Playing,
            Playback::Playing => Playback::Stopped,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Playback::Playing => "\u{1f50a}", // 🔊
            Playback::Stopped => "\u{1f507}", // 🔇
        }
    }

    pub fn button_background(self) -> &'static str {
        match self {
            Playback::Playing => "linear-gradient(45deg, #00ff88, #008844)",
            Playback::Stopped => "linear-gradient(45deg, #8b00ff, #4b0082)",
        }
    }

    pub fn notice(self) -> &'static str {
        match self {
            Playback::Playing => "\u{1f3b5} Background music enabled",
            Playback::Stopped => "\u{1f507} Background music disabled",
        }
    }
}

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    let Some(button) = doc.get_element_by_id("music-btn") else {
        return Ok(());
    };
    let button: HtmlElement = button.dyn_into()?;
    let state = Rc::new(Cell::new(Playback::Stopped));
    // Paint the initial Stopped chrome.
    apply(&button, state.get());

    let click_button = button.clone();
    let cb = Closure::wrap(Box::new(move || {
        let next = state.get().toggled();
        state.set(next);
        apply(&click_button, next);
        notify::toast(next.notice(), MUSIC_TOAST_MS);
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn apply(button: &HtmlElement, state: Playback) {
    if let Ok(Some(icon)) = button.query_selector(".music-icon") {
        icon.set_text_content(Some(state.icon()));
    }
    button
        .style()
        .set_property("background", state.button_background())
        .ok();
}
