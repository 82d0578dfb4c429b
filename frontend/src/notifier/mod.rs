//! Page-wide toast notifications.
//!
//! A single `#toast` element is created lazily on the first message and reused
//! afterwards. Showing a new message while one is visible replaces its text and
//! restarts the hide timer; there is no queue.

mod state;

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;
use state::ToastState;

const TOAST_ID: &str = "toast";

thread_local! {
    static NOTIFIER: RefCell<Option<Notifier>> = const { RefCell::new(None) };
}

struct Notifier {
    element: HtmlElement,
    state: ToastState,
}

impl Notifier {
    /// Adopts an existing `#toast` element or appends a new one to `<body>`.
    fn mount() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let element = match document.get_element_by_id(TOAST_ID) {
            Some(existing) => existing.dyn_into::<HtmlElement>().ok()?,
            None => {
                let created = document.create_element("div").ok()?;
                created.set_id(TOAST_ID);
                created.set_attribute("role", "status").ok();
                created.set_attribute("aria-live", "polite").ok();
                let created: HtmlElement = created.unchecked_into();
                document.body()?.append_child(&created).ok()?;
                created
            }
        };

        let style = element.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("right", "20px").ok();
        style.set_property("padding", "12px 20px").ok();
        style.set_property("color", "#fff").ok();
        style.set_property("border-radius", "8px").ok();
        style.set_property("z-index", "9999").ok();
        style.set_property("transition", "opacity 0.3s").ok();
        style.set_property("font-family", "Arial, sans-serif").ok();
        style.set_property("opacity", "0").ok();
        style.set_property("pointer-events", "none").ok();

        Some(Self {
            element,
            state: ToastState::default(),
        })
    }

    fn render(&self) {
        self.element.set_text_content(Some(&self.state.message));
        let style = self.element.style();
        style.set_property("background", self.state.background()).ok();
        if self.state.visible {
            style.set_property("opacity", "1").ok();
            style.set_property("pointer-events", "auto").ok();
        } else {
            style.set_property("opacity", "0").ok();
            style.set_property("pointer-events", "none").ok();
        }
    }
}

/// Shows `message` for the configured duration.
pub fn notify(message: &str, is_error: bool) {
    notify_for(message, is_error, config::current().toast_duration_ms);
}

/// Shows `message` and hides it after `duration_ms`, unless a newer message
/// replaced it in the meantime.
pub fn notify_for(message: &str, is_error: bool, duration_ms: u32) {
    let generation = NOTIFIER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let stale = slot
            .as_ref()
            .map_or(true, |n| !n.element.is_connected());
        if stale {
            *slot = Notifier::mount();
        }
        let notifier = slot.as_mut()?;
        let generation = notifier.state.show(message, is_error);
        notifier.render();
        Some(generation)
    });

    let Some(generation) = generation else {
        gloo_console::warn!("toast could not be mounted:", message.to_string());
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        NOTIFIER.with(|cell| {
            if let Some(notifier) = cell.borrow_mut().as_mut() {
                if notifier.state.expire(generation) {
                    notifier.render();
                }
            }
        });
    });
}
