use super::utils::ContactFields;
use super::view_model::{ContactFormViewModel, ContactSurface};
use crate::config::ids;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

const FIELD_NAMES: [&str; 3] = ["name", "email", "message"];

pub struct DomContactSurface {
    form: HtmlFormElement,
    status: Option<HtmlElement>,
    submit: Option<HtmlButtonElement>,
}

impl DomContactSurface {
    pub fn new(document: &Document, form: HtmlFormElement) -> Self {
        let status = document
            .get_element_by_id(ids::FORM_STATUS)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let submit = form
            .query_selector("[type='submit']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Self {
            form,
            status,
            submit,
        }
    }

    fn field(&self, name: &str) -> Option<web_sys::Element> {
        self.form
            .query_selector(&format!("[name='{name}']"))
            .ok()
            .flatten()
    }

    fn value_of(&self, name: &str) -> String {
        let Some(el) = self.field(name) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    pub fn read_fields(&self) -> ContactFields {
        ContactFields::new(
            self.value_of("name"),
            self.value_of("email"),
            self.value_of("message"),
        )
    }
}

impl ContactSurface for DomContactSurface {
    // Written field by field: `form.reset()` would fire the reset handler and
    // replace the success message.
    fn clear_fields(&self) {
        for name in FIELD_NAMES {
            let Some(el) = self.field(name) else {
                continue;
            };
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                input.set_value("");
            } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                area.set_value("");
            }
        }
    }

    fn set_status_text(&self, text: &str) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(text));
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(!enabled);
            let _ = button.set_attribute("aria-busy", if enabled { "false" } else { "true" });
        }
    }

    fn focus_name(&self) {
        if let Some(el) = self
            .field("name")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
}

/// Binds submit and reset handling; the form's own validation UI is bypassed
/// in favour of the status element.
pub fn bind(form: HtmlFormElement, surface: std::rc::Rc<DomContactSurface>, vm: ContactFormViewModel) {
    form.set_no_validate(true);

    let submit_vm = vm.clone();
    let reader = surface.clone();
    let on_submit = Closure::wrap(Box::new(move |ev: Event| {
        ev.prevent_default();
        let vm = submit_vm.clone();
        let fields = reader.read_fields();
        spawn_local(async move {
            vm.submit(fields).await;
        });
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();

    let on_reset = Closure::wrap(Box::new(move |_: Event| {
        vm.on_reset();
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("reset", on_reset.as_ref().unchecked_ref());
    on_reset.forget();
}
