use crate::state::nav::NavState;
use crate::state::theme::ThemeState;
use crate::utils::keys::{classify, KeyChord, KeyIntent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

fn chord(ev: &KeyboardEvent) -> KeyChord {
    KeyChord {
        key: ev.key(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
        shift: ev.shift_key(),
        alt: ev.alt_key(),
    }
}

/// Document-level key handling, active regardless of which element has focus.
pub fn init_shortcuts(document: &Document, theme: Option<ThemeState>, nav: Option<NavState>) {
    if theme.is_none() && nav.is_none() {
        return;
    }
    let closure = Closure::wrap(Box::new(move |ev: KeyboardEvent| match classify(&chord(&ev)) {
        KeyIntent::ToggleTheme => {
            if let Some(theme) = &theme {
                ev.prevent_default();
                theme.toggle();
            }
        }
        KeyIntent::Dismiss => {
            if let Some(nav) = &nav {
                nav.close_on_escape();
            }
        }
        KeyIntent::Other => {}
    }) as Box<dyn FnMut(_)>);
    if document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("keyboard shortcuts unavailable");
    }
    closure.forget();
}
