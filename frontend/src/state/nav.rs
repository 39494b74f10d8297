use leptos::*;
use std::rc::Rc;

/// Document side of the mobile navigation.
pub trait NavSurface {
    /// Reflects `open` on both the container class and the trigger's
    /// `aria-expanded`.
    fn set_open(&self, open: bool);
    /// Returns false when the menu has no links to focus.
    fn focus_first_link(&self) -> bool;
    fn focus_trigger(&self);
}

#[derive(Clone)]
pub struct NavState {
    open: RwSignal<bool>,
    surface: Rc<dyn NavSurface>,
}

impl NavState {
    pub fn new(surface: Rc<dyn NavSurface>) -> Self {
        surface.set_open(false);
        Self {
            open: create_rw_signal(false),
            surface,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get_untracked()
    }

    pub fn toggle_open(&self) {
        let open = !self.open.get_untracked();
        self.set_open(open);
        if open && !self.surface.focus_first_link() {
            log::debug!("navigation opened without links to focus");
        }
    }

    pub fn close_on_item_activate(&self) {
        self.set_open(false);
    }

    pub fn close_on_escape(&self) {
        if !self.is_open() {
            return;
        }
        self.set_open(false);
        self.surface.focus_trigger();
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
        self.surface.set_open(open);
    }
}
