use crate::error::TransportError;
use crate::pages::contact::repository::ContactTransport;
use crate::pages::contact::utils::ContactFields;
use crate::pages::contact::view_model::ContactSurface;
use crate::state::nav::NavSurface;
use crate::state::theme::{Theme, ThemeSurface, ToggleAffordance};
use crate::utils::schedule::Scheduler;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct RecordingThemeSurface {
    marker: Cell<Option<Theme>>,
    affordance: RefCell<Option<ToggleAffordance>>,
    broadcasts: RefCell<Vec<Theme>>,
    transitions: Cell<usize>,
}

impl RecordingThemeSurface {
    pub fn marker(&self) -> Option<Theme> {
        self.marker.get()
    }

    pub fn affordance(&self) -> Option<ToggleAffordance> {
        self.affordance.borrow().clone()
    }

    pub fn broadcasts(&self) -> Vec<Theme> {
        self.broadcasts.borrow().clone()
    }

    pub fn transitions(&self) -> usize {
        self.transitions.get()
    }
}

impl ThemeSurface for RecordingThemeSurface {
    fn set_marker(&self, theme: Theme) {
        self.marker.set(Some(theme));
    }

    fn update_toggle(&self, affordance: &ToggleAffordance) {
        *self.affordance.borrow_mut() = Some(affordance.clone());
    }

    fn broadcast(&self, theme: Theme) {
        self.broadcasts.borrow_mut().push(theme);
    }

    fn animate_transition(&self) {
        self.transitions.set(self.transitions.get() + 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FirstLink,
    Trigger,
}

pub struct RecordingNavSurface {
    links: usize,
    expanded: Cell<Option<bool>>,
    focus: Cell<Option<Focus>>,
}

impl RecordingNavSurface {
    pub fn with_links(links: usize) -> Self {
        Self {
            links,
            expanded: Cell::new(None),
            focus: Cell::new(None),
        }
    }

    pub fn expanded(&self) -> Option<bool> {
        self.expanded.get()
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus.get()
    }
}

impl NavSurface for RecordingNavSurface {
    fn set_open(&self, open: bool) {
        self.expanded.set(Some(open));
    }

    fn focus_first_link(&self) -> bool {
        if self.links == 0 {
            return false;
        }
        self.focus.set(Some(Focus::FirstLink));
        true
    }

    fn focus_trigger(&self) {
        self.focus.set(Some(Focus::Trigger));
    }
}

pub struct RecordingContactSurface {
    fields_present: Cell<bool>,
    status_text: RefCell<String>,
    submit_enabled: Cell<Option<bool>>,
    name_focused: Cell<bool>,
}

impl RecordingContactSurface {
    pub fn filled() -> Self {
        Self {
            fields_present: Cell::new(true),
            status_text: RefCell::new(String::new()),
            submit_enabled: Cell::new(None),
            name_focused: Cell::new(false),
        }
    }

    pub fn fields_present(&self) -> bool {
        self.fields_present.get()
    }

    pub fn status_text(&self) -> String {
        self.status_text.borrow().clone()
    }

    pub fn submit_enabled(&self) -> Option<bool> {
        self.submit_enabled.get()
    }

    pub fn name_focused(&self) -> bool {
        self.name_focused.get()
    }
}

impl ContactSurface for RecordingContactSurface {
    fn clear_fields(&self) {
        self.fields_present.set(false);
    }

    fn set_status_text(&self, text: &str) {
        *self.status_text.borrow_mut() = text.to_string();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(Some(enabled));
    }

    fn focus_name(&self) {
        self.name_focused.set(true);
    }
}

#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn run_pending(&self) {
        let tasks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for task in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push(task);
    }
}

#[derive(Default)]
pub struct RecordingTransport {
    deliveries: Cell<usize>,
}

impl RecordingTransport {
    pub fn deliveries(&self) -> usize {
        self.deliveries.get()
    }
}

#[async_trait(?Send)]
impl ContactTransport for RecordingTransport {
    async fn deliver(&self, _fields: &ContactFields) -> Result<(), TransportError> {
        self.deliveries.set(self.deliveries.get() + 1);
        Ok(())
    }
}

pub struct FailingTransport;

#[async_trait(?Send)]
impl ContactTransport for FailingTransport {
    async fn deliver(&self, _fields: &ContactFields) -> Result<(), TransportError> {
        Err(TransportError::Simulated("connection reset".into()))
    }
}

/// Holds every delivery until `open` is called, so tests can observe the
/// in-flight state.
#[derive(Default)]
pub struct GatedTransport {
    calls: Cell<usize>,
    open: Cell<bool>,
}

impl GatedTransport {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn open(&self) {
        self.open.set(true);
    }

    pub async fn wait_until_called(&self) {
        while self.calls.get() == 0 {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait(?Send)]
impl ContactTransport for GatedTransport {
    async fn deliver(&self, _fields: &ContactFields) -> Result<(), TransportError> {
        self.calls.set(self.calls.get() + 1);
        while !self.open.get() {
            tokio::task::yield_now().await;
        }
        Ok(())
    }
}
