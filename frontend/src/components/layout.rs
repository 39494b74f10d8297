use crate::config::ids;
use crate::state::nav::{NavState, NavSurface};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

const OPEN_CLASS: &str = "open";

pub struct DomNavSurface {
    trigger: HtmlElement,
    nav: HtmlElement,
}

impl NavSurface for DomNavSurface {
    fn set_open(&self, open: bool) {
        let _ = self.nav.class_list().toggle_with_force(OPEN_CLASS, open);
        let _ = self
            .trigger
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    fn focus_first_link(&self) -> bool {
        let link = self
            .nav
            .query_selector("a")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        match link {
            Some(link) => link.focus().is_ok(),
            None => false,
        }
    }

    fn focus_trigger(&self) {
        let _ = self.trigger.focus();
    }
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn init_nav(document: &Document) -> Option<NavState> {
    let (Some(trigger), Some(nav)) = (
        html_element(document, ids::NAV_TOGGLE),
        html_element(document, ids::NAV),
    ) else {
        log::debug!("mobile navigation markup not found");
        return None;
    };
    Some(bind_nav(trigger, nav))
}

/// Wires the trigger click and delegated link clicks inside `nav`.
pub fn bind_nav(trigger: HtmlElement, nav: HtmlElement) -> NavState {
    let state = NavState::new(Rc::new(DomNavSurface {
        trigger: trigger.clone(),
        nav: nav.clone(),
    }));

    let toggle_state = state.clone();
    let on_toggle = Closure::wrap(Box::new(move |_: MouseEvent| {
        toggle_state.toggle_open();
    }) as Box<dyn FnMut(_)>);
    let _ = trigger.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
    on_toggle.forget();

    // Delegated: any click landing inside a link of the menu closes it.
    let link_state = state.clone();
    let on_link = Closure::wrap(Box::new(move |ev: MouseEvent| {
        let hit_link = ev
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
            .is_some();
        if hit_link {
            link_state.close_on_item_activate();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = nav.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref());
    on_link.forget();

    state
}
