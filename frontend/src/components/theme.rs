use crate::config::ids;
use crate::state::preferences::ThemeStore;
use crate::state::theme::{
    Theme, ThemeState, ThemeSurface, ToggleAffordance, DARK_QUERY, THEME_CHANGE_EVENT,
};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    CustomEvent, CustomEventInit, Document, Element, HtmlElement, MediaQueryListEvent, Window,
};

const TRANSITION_CLASS: &str = "theme-transition";
const TRANSITION_MS: u32 = 300;
const DARK_CLASS: &str = "dark";

pub struct DomThemeSurface {
    document: Document,
    root: Element,
    toggle: Option<HtmlElement>,
}

impl ThemeSurface for DomThemeSurface {
    fn set_marker(&self, theme: Theme) {
        let _ = self.root.set_attribute("data-theme", theme.as_str());
        let _ = self
            .root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme == Theme::Dark);
    }

    fn update_toggle(&self, affordance: &ToggleAffordance) {
        let Some(button) = &self.toggle else {
            return;
        };
        button.set_text_content(Some(affordance.glyph));
        let _ = button.set_attribute("aria-label", affordance.label);
        let _ = button.set_attribute("title", affordance.label);
        let _ = button.set_attribute(
            "aria-pressed",
            if affordance.pressed { "true" } else { "false" },
        );
    }

    fn broadcast(&self, theme: Theme) {
        let detail = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&detail, &"theme".into(), &theme.as_str().into());
        let init = CustomEventInit::new();
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(THEME_CHANGE_EVENT, &init) {
            Ok(event) => {
                let _ = self.document.dispatch_event(&event);
            }
            Err(_) => log::warn!("could not construct {THEME_CHANGE_EVENT} event"),
        }
    }

    fn animate_transition(&self) {
        let _ = self.root.class_list().add_1(TRANSITION_CLASS);
        let root = self.root.clone();
        Timeout::new(TRANSITION_MS, move || {
            let _ = root.class_list().remove_1(TRANSITION_CLASS);
        })
        .forget();
    }
}

pub fn init_theme(window: &Window, document: &Document, store: ThemeStore) -> Option<ThemeState> {
    let root = document.document_element()?;
    let toggle = document
        .get_element_by_id(ids::THEME_TOGGLE)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if toggle.is_none() {
        log::debug!("no #{} control; theme still applied", ids::THEME_TOGGLE);
    }

    let media_query = window.match_media(DARK_QUERY).ok().flatten();
    let system_dark = media_query.as_ref().map(|m| m.matches()).unwrap_or(false);

    let surface = Rc::new(DomThemeSurface {
        document: document.clone(),
        root,
        toggle: toggle.clone(),
    });
    let state = ThemeState::new(store, surface, system_dark);

    if let Some(list) = media_query {
        let state_clone = state.clone();
        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            state_clone.on_system_preference_change(event.matches());
        }) as Box<dyn FnMut(_)>);
        if list
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("system theme changes will not be tracked");
        }
        closure.forget();
    }

    if let Some(button) = toggle {
        let state_clone = state.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            state_clone.toggle();
        }) as Box<dyn FnMut(_)>);
        let _ = button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    Some(state)
}
