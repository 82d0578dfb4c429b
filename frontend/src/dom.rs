//! Small DOM helpers shared by the page features.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

const SUBMIT_CONTROLS: &str = "button[type=submit], input[type=submit], button:not([type])";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn set_text(id: &str, text: &str) -> bool {
    match element_by_id(id) {
        Some(element) => {
            element.set_text_content(Some(text));
            true
        }
        None => false,
    }
}

/// One named control as seen at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub value: String,
    /// `Some` for radio buttons and checkboxes.
    pub checked: Option<bool>,
}

/// Value submitted for a group of same-named controls.
///
/// A radio or checkbox group yields the first checked member, or an empty
/// string when nothing is checked. Any other control yields its own value.
pub fn submitted_value(controls: &[Control]) -> Option<String> {
    let first = controls.first()?;
    if first.checked.is_none() {
        return Some(first.value.clone());
    }
    Some(
        controls
            .iter()
            .find(|c| c.checked == Some(true))
            .map(|c| c.value.clone())
            .unwrap_or_default(),
    )
}

/// Input types whose value is wiped after a successful submission.
pub fn clears_after_submit(input_type: &str) -> bool {
    !matches!(
        input_type.to_ascii_lowercase().as_str(),
        "radio" | "checkbox" | "hidden" | "submit" | "button" | "reset" | "image" | "file"
    )
}

fn control(element: &Element) -> Option<Control> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let kind = input.type_().to_ascii_lowercase();
        let checked = matches!(kind.as_str(), "radio" | "checkbox").then(|| input.checked());
        return Some(Control {
            value: input.value(),
            checked,
        });
    }
    let value = if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        element.dyn_ref::<HtmlTextAreaElement>()?.value()
    };
    Some(Control {
        value,
        checked: None,
    })
}

fn elements(form: &HtmlFormElement, selector: &str) -> Vec<Element> {
    let Ok(list) = form.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current value of the control(s) named `name` inside `form`.
pub fn field_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    let controls: Vec<Control> = elements(form, &format!("[name=\"{name}\"]"))
        .iter()
        .filter_map(control)
        .collect();
    submitted_value(&controls)
}

/// Restores the form's markup state, then empties every free-text field so
/// preset `value` attributes do not survive a successful submission.
pub fn clear_form(form: &HtmlFormElement) {
    form.reset();
    for element in elements(form, "input, textarea") {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            if clears_after_submit(&input.type_()) {
                input.set_value("");
            }
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value("");
        }
    }
}

/// Disables the submit controls of `form` while a request is in flight.
pub fn set_busy(form: &HtmlFormElement, busy: bool) {
    if busy {
        form.set_attribute("aria-busy", "true").ok();
    } else {
        form.remove_attribute("aria-busy").ok();
    }

    for control in elements(form, SUBMIT_CONTROLS) {
        if busy {
            control.set_attribute("disabled", "").ok();
        } else {
            control.remove_attribute("disabled").ok();
        }
    }
}

pub fn navigate_to(page: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(page).is_err() {
            gloo_console::error!(format!("navigation to {page} failed"));
        }
    }
}

/// Navigates after `delay_ms`, giving the user time to read the toast.
pub fn navigate_after(page: &'static str, delay_ms: u32) {
    if delay_ms == 0 {
        navigate_to(page);
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        navigate_to(page);
    });
}
