//! Mobile navigation: injected hamburger control driving the menu
//! panel's visibility class. Any menu link collapses the menu.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

const HAMBURGER_CSS: &str = r#"
.hamburger {
    display: none;
    flex-direction: column;
    background: none;
    border: none;
    cursor: pointer;
    padding: 0.5rem;
}

.hamburger span {
    width: 25px;
    height: 3px;
    background: #00ffff;
    margin: 3px 0;
    transition: 0.3s;
    border-radius: 2px;
}

.hamburger.active span:nth-child(1) {
    transform: rotate(-45deg) translate(-5px, 6px);
}

.hamburger.active span:nth-child(2) {
    opacity: 0;
}

.hamburger.active span:nth-child(3) {
    transform: rotate(45deg) translate(-5px, -6px);
}

@media (max-width: 768px) {
    .hamburger {
        display: flex;
    }

    .nav-menu {
        position: fixed;
        left: -100%;
        top: 70px;
        flex-direction: column;
        background-color: rgba(10, 10, 10, 0.95);
        width: 100%;
        text-align: center;
        transition: 0.3s;
        backdrop-filter: blur(10px);
        border-bottom: 2px solid #00ffff;
        padding: 2rem 0;
    }

    .nav-menu.active {
        left: 0;
    }
}
"#;

pub(crate) fn setup(doc: &Document) -> Result<(), JsValue> {
    let Some(navbar) = doc.query_selector(".navbar")? else {
        return Ok(());
    };
    let Some(menu) = doc.query_selector(".nav-menu")? else {
        return Ok(());
    };
    let Some(container) = navbar.query_selector(".nav-container")? else {
        return Ok(());
    };

    let hamburger = doc.create_element("button")?;
    hamburger.set_class_name("hamburger");
    hamburger.set_inner_html("<span></span><span></span><span></span>");
    dom::inject_css(doc, HAMBURGER_CSS)?;

    // Slot the control in before the music toggle; append when absent.
    match doc.query_selector(".music-toggle")? {
        Some(anchor) => {
            container.insert_before(&hamburger, Some(anchor.as_ref()))?;
        }
        None => {
            container.insert_before(&hamburger, None)?;
        }
    }

    let state = Rc::new(Cell::new(MenuState::Closed));
    {
        let state = state.clone();
        let hb = hamburger.clone();
        let menu = menu.clone();
        let cb = Closure::wrap(Box::new(move || {
            let next = state.get().toggled();
            state.set(next);
            apply(&hb, &menu, next);
        }) as Box<dyn FnMut()>);
        hamburger.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // Navigating always collapses the menu.
    dom::for_each_selected(doc, ".nav-menu a", |link| {
        let state = state.clone();
        let hb = hamburger.clone();
        let menu = menu.clone();
        let cb = Closure::wrap(Box::new(move || {
            state.set(MenuState::Closed);
            apply(&hb, &menu, MenuState::Closed);
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .ok();
        cb.forget();
    })?;
    Ok(())
}

fn apply(hamburger: &Element, menu: &Element, state: MenuState) {
    if state.is_open() {
        hamburger.class_list().add_1("active").ok();
        menu.class_list().add_1("active").ok();
    } else {
        hamburger.class_list().remove_1("active").ok();
        menu.class_list().remove_1("active").ok();
    }
}
