//! Thin typed helpers over the browser DOM
//!
//! Every function is tolerant of missing elements: a renamed id in the
//! host page degrades to a no-op instead of a panic.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Replace the contents of the element with the given id
pub fn set_html(id: &str, html: &str) {
    if let Some(el) = by_id(id) {
        el.set_inner_html(html);
    }
}

pub fn input_value(id: &str) -> Option<String> {
    Some(by_id(id)?.dyn_into::<HtmlInputElement>().ok()?.value())
}

pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        input.set_value(value);
    }
}

pub fn select_value(id: &str) -> Option<String> {
    Some(by_id(id)?.dyn_into::<HtmlSelectElement>().ok()?.value())
}

pub fn set_select_value(id: &str, value: &str) {
    if let Some(select) = by_id(id).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok()) {
        select.set_value(value);
    }
}

pub fn textarea_value(id: &str) -> Option<String> {
    Some(by_id(id)?.dyn_into::<HtmlTextAreaElement>().ok()?.value())
}

pub fn set_textarea_value(id: &str, value: &str) {
    if let Some(area) = by_id(id).and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok()) {
        area.set_value(value);
    }
}

pub fn add_class(id: &str, class: &str) {
    if let Some(el) = by_id(id) {
        let _ = el.class_list().add_1(class);
    }
}

pub fn remove_class(id: &str, class: &str) {
    if let Some(el) = by_id(id) {
        let _ = el.class_list().remove_1(class);
    }
}

pub fn has_class(id: &str, class: &str) -> bool {
    by_id(id).map(|el| el.class_list().contains(class)).unwrap_or(false)
}

/// Show a page section or modal hidden with the `d-none` class
pub fn show(id: &str) {
    remove_class(id, "d-none");
}

pub fn hide(id: &str) {
    add_class(id, "d-none");
}

/// Blocking alert for form failures
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Run `f` over every element matching the selector
pub fn for_each(selector: &str, mut f: impl FnMut(Element)) {
    let Some(doc) = document() else { return };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            f(el);
        }
    }
}

pub fn on_click(id: &str, handler: impl FnMut(Event) + 'static) {
    if let Some(el) = by_id(id) {
        listen(&el, "click", handler);
    }
}

pub fn on_click_el(el: &Element, handler: impl FnMut(Event) + 'static) {
    listen(el, "click", handler);
}

pub fn on_change(id: &str, handler: impl FnMut(Event) + 'static) {
    if let Some(el) = by_id(id) {
        listen(&el, "change", handler);
    }
}

pub fn on_submit(id: &str, handler: impl FnMut(Event) + 'static) {
    if let Some(el) = by_id(id) {
        listen(&el, "submit", handler);
    }
}

// The closure is leaked; listeners live for the lifetime of the page.
fn listen(el: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
