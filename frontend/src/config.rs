use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::sync::OnceLock;

pub const DEFAULT_CONTACT_EMAIL: &str = "hello@example.com";
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 900;
pub const DEFAULT_STORAGE_KEY: &str = "landing:theme";

/// Element ids the page markup is expected to provide.
pub mod ids {
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const NAV: &str = "site-nav";
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const FORM_STATUS: &str = "form-status";
    pub const YEAR: &str = "year";
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact_email: String,
    pub submit_delay_ms: u32,
    pub storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(raw).context("malformed site config")?;
        Ok(cfg.sanitized())
    }

    // Blank strings in the injected object fall back to defaults rather than
    // producing an empty storage key or address.
    fn sanitized(mut self) -> Self {
        let defaults = SiteConfig::default();
        if self.contact_email.trim().is_empty() {
            self.contact_email = defaults.contact_email;
        }
        if self.storage_key.trim().is_empty() {
            self.storage_key = defaults.storage_key;
        }
        self
    }
}

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn read_from_globals() -> anyhow::Result<SiteConfig> {
    // Expect optional global object: window.__LANDING_CONFIG = { contact_email: "..." }
    let w = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
    let any = js_sys::Reflect::get(&w, &"__LANDING_CONFIG".into())
        .map_err(|_| anyhow!("window.__LANDING_CONFIG is not readable"))?;
    if any.is_undefined() || any.is_null() {
        return Ok(SiteConfig::default());
    }
    let raw = js_sys::JSON::stringify(&any)
        .map_err(|_| anyhow!("window.__LANDING_CONFIG is not serializable"))?;
    SiteConfig::from_json(&String::from(raw))
}

/// Loads the runtime config once. Unreadable or malformed config collapses
/// into defaults.
pub fn init() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| match read_from_globals() {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("using default site config: {err:#}");
            SiteConfig::default()
        }
    })
}
