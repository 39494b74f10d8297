use super::repository::ContactRepository;
use super::utils::{validate, ContactFields};
use crate::error::ValidationError;
use crate::utils::schedule::Scheduler;
use leptos::*;
use std::rc::Rc;

pub const SENDING_MESSAGE: &str = "Sending\u{2026}";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const CLEARED_MESSAGE: &str = "Form cleared.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Invalid(ValidationError),
    Sending,
    Success,
    Failure,
    Cleared,
}

impl FormStatus {
    pub fn message(&self, destination: &str) -> String {
        match self {
            FormStatus::Idle => String::new(),
            FormStatus::Invalid(err) => err.to_string(),
            FormStatus::Sending => SENDING_MESSAGE.to_string(),
            FormStatus::Success => format!(
                "Thanks! Your message is on its way. You can also reach me at {destination}."
            ),
            FormStatus::Failure => FAILURE_MESSAGE.to_string(),
            FormStatus::Cleared => CLEARED_MESSAGE.to_string(),
        }
    }
}

/// Document side of the contact form.
pub trait ContactSurface {
    fn clear_fields(&self);
    fn set_status_text(&self, text: &str);
    fn set_submit_enabled(&self, enabled: bool);
    fn focus_name(&self);
}

#[derive(Clone)]
pub struct ContactFormViewModel {
    pub status: RwSignal<FormStatus>,
    pub in_flight: RwSignal<bool>,
    destination: Rc<str>,
    repository: ContactRepository,
    surface: Rc<dyn ContactSurface>,
    scheduler: Rc<dyn Scheduler>,
}

impl ContactFormViewModel {
    pub fn new(
        repository: ContactRepository,
        surface: Rc<dyn ContactSurface>,
        scheduler: Rc<dyn Scheduler>,
        destination: impl Into<Rc<str>>,
    ) -> Self {
        Self {
            status: create_rw_signal(FormStatus::Idle),
            in_flight: create_rw_signal(false),
            destination: destination.into(),
            repository,
            surface,
            scheduler,
        }
    }

    pub async fn submit(&self, fields: ContactFields) {
        if self.in_flight.get_untracked() {
            log::debug!("submission ignored: previous attempt still in flight");
            return;
        }
        if let Err(err) = validate(&fields) {
            self.show(FormStatus::Invalid(err));
            return;
        }

        self.in_flight.set(true);
        self.surface.set_submit_enabled(false);
        self.show(FormStatus::Sending);

        match self.repository.send(&fields).await {
            Ok(()) => {
                self.surface.clear_fields();
                self.show(FormStatus::Success);
                self.release();
                self.surface.focus_name();
            }
            Err(err) => {
                log::error!("contact submission failed: {err}");
                self.show(FormStatus::Failure);
                self.release();
            }
        }
    }

    /// The browser clears the inputs itself; the status note is written on
    /// the next tick so the reset event does not overwrite it.
    pub fn on_reset(&self) {
        let status = self.status;
        let surface = self.surface.clone();
        let destination = self.destination.clone();
        self.scheduler.defer(Box::new(move || {
            status.set(FormStatus::Cleared);
            surface.set_status_text(&FormStatus::Cleared.message(&destination));
        }));
    }

    pub fn status_message(&self) -> String {
        self.status.get_untracked().message(&self.destination)
    }

    fn show(&self, status: FormStatus) {
        self.surface
            .set_status_text(&status.message(&self.destination));
        self.status.set(status);
    }

    fn release(&self) {
        self.in_flight.set(false);
        self.surface.set_submit_enabled(true);
    }
}
