pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use state::preferences::ThemeStore;
    use std::rc::Rc;
    use utils::storage::BrowserStorage;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting landing page behavior (wasm)");

    let config = config::init();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let store = ThemeStore::new(Rc::new(BrowserStorage), config.storage_key.as_str());
    let theme = components::theme::init_theme(&window, &document, store);
    let nav = components::layout::init_nav(&document);
    components::shortcuts::init_shortcuts(&document, theme, nav);
    utils::scroll::init_smooth_scroll(&document);
    pages::contact::init_contact(&document, config);

    if let Some(year) = document.get_element_by_id(config::ids::YEAR) {
        year.set_text_content(Some(&utils::time::current_year_label()));
    }
}
