use super::preferences::ThemeStore;
use leptos::*;
use std::rc::Rc;

pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const THEME_CHANGE_EVENT: &str = "themechange";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_system(system_dark: bool) -> Self {
        if system_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Stored choice first, then the system signal, then light.
pub fn resolve(stored: Option<Theme>, system_dark: bool) -> Theme {
    stored.unwrap_or_else(|| Theme::from_system(system_dark))
}

/// How the toggle control should present itself while `theme` is active.
/// The label names the action a click performs, not the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub glyph: &'static str,
    pub label: &'static str,
    pub pressed: bool,
}

impl ToggleAffordance {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                glyph: "\u{2600}",
                label: "Switch to light theme",
                pressed: true,
            },
            Theme::Light => Self {
                glyph: "\u{263E}",
                label: "Switch to dark theme",
                pressed: false,
            },
        }
    }
}

/// Document side of the theme: root marker, toggle control, change event.
pub trait ThemeSurface {
    fn set_marker(&self, theme: Theme);
    fn update_toggle(&self, affordance: &ToggleAffordance);
    fn broadcast(&self, theme: Theme);
    /// Briefly enables the CSS transition class on the root element.
    fn animate_transition(&self);
}

#[derive(Clone)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
    // Set by the first saved choice of the session; covers storage that
    // silently drops writes.
    explicit: RwSignal<bool>,
    store: ThemeStore,
    surface: Rc<dyn ThemeSurface>,
}

impl ThemeState {
    /// Resolves the startup theme and applies it without persisting.
    pub fn new(store: ThemeStore, surface: Rc<dyn ThemeSurface>, system_dark: bool) -> Self {
        let initial = resolve(store.get(), system_dark);
        log::debug!("initial theme resolved to {}", initial.as_str());
        let state = Self {
            theme: create_rw_signal(initial),
            explicit: create_rw_signal(false),
            store,
            surface,
        };
        state.apply(initial);
        state
    }

    pub fn set_theme(&self, theme: Theme, save: bool) {
        self.theme.set(theme);
        self.apply(theme);
        if save {
            self.explicit.set(true);
            self.store.set(theme);
        }
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::info!("theme toggled to {}", next.as_str());
        self.surface.animate_transition();
        self.set_theme(next, true);
    }

    /// Follows the system signal only while the user has not chosen a theme.
    pub fn on_system_preference_change(&self, is_dark: bool) {
        if self.explicit.get_untracked() || self.store.get().is_some() {
            log::debug!("system preference change ignored: explicit theme chosen");
            return;
        }
        self.set_theme(Theme::from_system(is_dark), false);
    }

    pub fn apply(&self, theme: Theme) {
        self.surface.set_marker(theme);
        self.surface.update_toggle(&ToggleAffordance::for_theme(theme));
        self.surface.broadcast(theme);
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fakes::RecordingThemeSurface;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::storage::{KeyValueStore, MemoryStorage};

    fn setup(
        backend: Rc<MemoryStorage>,
        system_dark: bool,
    ) -> (ThemeState, Rc<RecordingThemeSurface>) {
        let surface = Rc::new(RecordingThemeSurface::default());
        let store = ThemeStore::new(backend, "test:theme");
        let state = ThemeState::new(store, surface.clone(), system_dark);
        (state, surface)
    }

    #[test]
    fn resolve_prefers_stored_then_system_then_light() {
        assert_eq!(resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(resolve(None, true), Theme::Dark);
        assert_eq!(resolve(None, false), Theme::Light);
    }

    #[test]
    fn affordance_describes_next_action() {
        let dark = ToggleAffordance::for_theme(Theme::Dark);
        assert_eq!(dark.label, "Switch to light theme");
        assert!(dark.pressed);
        let light = ToggleAffordance::for_theme(Theme::Light);
        assert_eq!(light.label, "Switch to dark theme");
        assert!(!light.pressed);
        assert_ne!(dark.glyph, light.glyph);
    }

    #[test]
    fn startup_applies_without_persisting() {
        with_runtime(|| {
            let backend = Rc::new(MemoryStorage::new());
            let (state, surface) = setup(backend.clone(), true);
            assert_eq!(state.current().get_untracked(), Theme::Dark);
            assert_eq!(surface.marker(), Some(Theme::Dark));
            assert_eq!(surface.broadcasts(), vec![Theme::Dark]);
            assert_eq!(backend.get_item("test:theme").unwrap(), None);
        });
    }

    #[test]
    fn toggle_flips_applies_and_persists() {
        with_runtime(|| {
            let backend = Rc::new(MemoryStorage::new());
            let (state, surface) = setup(backend.clone(), false);
            state.toggle();
            assert_eq!(state.current().get_untracked(), Theme::Dark);
            assert_eq!(surface.marker(), Some(Theme::Dark));
            assert_eq!(
                surface.affordance(),
                Some(ToggleAffordance::for_theme(Theme::Dark))
            );
            assert_eq!(surface.transitions(), 1);
            assert_eq!(
                backend.get_item("test:theme").unwrap().as_deref(),
                Some("dark")
            );
        });
    }

    #[test]
    fn explicit_choice_beats_system_change() {
        with_runtime(|| {
            let backend = Rc::new(MemoryStorage::new());
            let (state, _surface) = setup(backend, false);
            state.set_theme(Theme::Dark, true);
            state.on_system_preference_change(false);
            assert_eq!(state.current().get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn system_change_followed_while_unset() {
        with_runtime(|| {
            let (state, surface) = setup(Rc::new(MemoryStorage::new()), false);
            state.on_system_preference_change(true);
            assert_eq!(state.current().get_untracked(), Theme::Dark);
            assert_eq!(surface.broadcasts(), vec![Theme::Light, Theme::Dark]);
        });
    }

    #[test]
    fn apply_is_idempotent() {
        with_runtime(|| {
            let (state, surface) = setup(Rc::new(MemoryStorage::new()), false);
            state.apply(Theme::Dark);
            let marker = surface.marker();
            let affordance = surface.affordance();
            state.apply(Theme::Dark);
            assert_eq!(surface.marker(), marker);
            assert_eq!(surface.affordance(), affordance);
        });
    }

    #[test]
    fn persisted_choice_survives_reload() {
        with_runtime(|| {
            let backend = Rc::new(MemoryStorage::new());
            let (state, _) = setup(backend.clone(), false);
            state.toggle();

            let (reloaded, surface) = setup(backend, false);
            assert_eq!(reloaded.current().get_untracked(), Theme::Dark);
            assert_eq!(surface.marker(), Some(Theme::Dark));
        });
    }

    #[test]
    fn theme_works_without_storage() {
        with_runtime(|| {
            let (state, surface) = setup(Rc::new(MemoryStorage::unavailable()), true);
            state.toggle();
            assert_eq!(state.current().get_untracked(), Theme::Light);
            assert_eq!(surface.marker(), Some(Theme::Light));
            state.on_system_preference_change(true);
            assert_eq!(state.current().get_untracked(), Theme::Light);
        });
    }

    #[test]
    fn unsaved_choice_still_beats_system_change() {
        with_runtime(|| {
            let (state, surface) = setup(Rc::new(MemoryStorage::unavailable()), false);
            state.toggle();
            state.on_system_preference_change(false);
            assert_eq!(state.current().get_untracked(), Theme::Dark);
            assert_eq!(surface.marker(), Some(Theme::Dark));
        });
    }

    #[test]
    fn system_change_without_storage_followed_until_user_chooses() {
        with_runtime(|| {
            let (state, _) = setup(Rc::new(MemoryStorage::unavailable()), false);
            state.on_system_preference_change(true);
            assert_eq!(state.current().get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn parse_accepts_exact_values_only() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse(" dark "), None);
        assert_eq!(Theme::parse("Dark"), None);
    }
}
