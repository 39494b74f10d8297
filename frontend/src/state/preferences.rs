use super::theme::Theme;
use crate::utils::storage::KeyValueStore;
use std::rc::Rc;

/// Persisted theme preference. Storage failures never escape: reads degrade
/// to "unset" and writes are dropped.
#[derive(Clone)]
pub struct ThemeStore {
    backend: Rc<dyn KeyValueStore>,
    key: String,
}

impl ThemeStore {
    pub fn new(backend: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn get(&self) -> Option<Theme> {
        match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => {
                let parsed = Theme::parse(&raw);
                if parsed.is_none() {
                    log::warn!("ignoring unrecognised stored theme {raw:?}");
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                None
            }
        }
    }

    pub fn set(&self, theme: Theme) {
        if let Err(err) = self.backend.set_item(&self.key, theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.backend.remove_item(&self.key) {
            log::warn!("theme preference not cleared: {err}");
        }
    }
}
