#[cfg(target_arch = "wasm32")]
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use utils::{validate, ContactFields};
pub use view_model::{ContactFormViewModel, FormStatus};

#[cfg(target_arch = "wasm32")]
pub fn init_contact(
    document: &web_sys::Document,
    config: &crate::config::SiteConfig,
) -> Option<ContactFormViewModel> {
    use crate::config::ids;
    use crate::utils::schedule::NextTick;
    use repository::{ContactRepository, SimulatedTransport};
    use std::rc::Rc;
    use wasm_bindgen::JsCast;

    let Some(form) = document
        .get_element_by_id(ids::CONTACT_FORM)
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        log::debug!("no #{} on this page", ids::CONTACT_FORM);
        return None;
    };

    let surface = Rc::new(panel::DomContactSurface::new(document, form.clone()));
    let repository = ContactRepository::new_with_transport(Rc::new(SimulatedTransport::new(
        config.submit_delay_ms,
    )));
    let vm = ContactFormViewModel::new(
        repository,
        surface.clone(),
        Rc::new(NextTick),
        config.contact_email.as_str(),
    );
    panel::bind(form, surface, vm.clone());
    Some(vm)
}
