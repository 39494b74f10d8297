/// Element id targeted by an in-page anchor `href`, or `None` when the link
/// is not an in-page jump. `#` and `#!` are placeholders and keep default
/// browser behavior.
pub fn fragment_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() || fragment == "!" {
        return None;
    }
    Some(fragment)
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::fragment_target;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, HtmlAnchorElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
        ScrollLogicalPosition,
    };

    pub fn init(document: &Document) {
        let anchors = match document.query_selector_all("a[href^='#']") {
            Ok(list) => list,
            Err(_) => return,
        };
        let mut bound = 0;
        for index in 0..anchors.length() {
            let Some(anchor) = anchors
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlAnchorElement>().ok())
            else {
                continue;
            };
            let doc = document.clone();
            let link = anchor.clone();
            let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(target) = fragment_target(&href).and_then(|id| doc.get_element_by_id(id))
                else {
                    return;
                };
                ev.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }) as Box<dyn FnMut(_)>);
            if anchor
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .is_ok()
            {
                bound += 1;
            }
            closure.forget();
        }
        log::debug!("smooth scroll bound to {bound} anchors");
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::init as init_smooth_scroll;
