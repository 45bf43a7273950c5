//! Control binding for the static page variant.
//!
//! # Design
//! - Each control's click handler owns its toggle machine outright.
//! - Missing chrome is logged and skipped; the rest of the page stays usable.

use crate::app::dom::{body, element_by_id, log_dom_error};
use crate::app::environment::MediaQueryProbe;
use crate::core::contract::{
    COLLAPSE_BUTTON_ID, MAIN_CONTENT_ID, SIDEBAR_ID, THEME_TOGGLE_BUTTON_ID,
};
use crate::core::sidebar::SidebarToggle;
use crate::core::theme::ThemeToggle;
use gloo::console;
use gloo::events::EventListener;
use web_sys::Element;

pub(crate) fn bind_static_page() {
    bind_theme_toggle();
    bind_sidebar_toggle();
}

fn bind_theme_toggle() {
    let root: Element = match body() {
        Ok(body) => body.into(),
        Err(err) => {
            log_dom_error("theme toggle disabled", &err);
            return;
        }
    };
    let (mut toggle, applied) = ThemeToggle::initialize_theme(&MediaQueryProbe, &root);
    if let Err(err) = applied {
        log_dom_error("initial theme not applied", &err);
    }
    console::debug!("initial theme", toggle.state().as_str());

    bind_click(THEME_TOGGLE_BUTTON_ID, move || {
        if let Err(err) = toggle.toggle_theme(&root) {
            log_dom_error("theme toggle failed", &err);
        }
    });
}

fn bind_sidebar_toggle() {
    let regions = element_by_id(SIDEBAR_ID)
        .and_then(|sidebar| element_by_id(MAIN_CONTENT_ID).map(|main| (sidebar, main)));
    let (sidebar, main) = match regions {
        Ok(regions) => regions,
        Err(err) => {
            log_dom_error("sidebar toggle disabled", &err);
            return;
        }
    };
    let mut toggle = SidebarToggle::new();

    bind_click(COLLAPSE_BUTTON_ID, move || {
        if let Err(err) = toggle.toggle_sidebar(&sidebar, &main) {
            log_dom_error("sidebar toggle failed", &err);
        }
    });
}

fn bind_click(id: &'static str, mut handler: impl FnMut() + 'static) {
    match element_by_id(id) {
        Ok(control) => EventListener::new(&control, "click", move |_event| handler()).forget(),
        Err(err) => log_dom_error("control not bound", &err),
    }
}
