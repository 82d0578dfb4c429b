//! Light/dark theme persisted under `sns_theme` and exposed to CSS as
//! `<html data-theme="...">`.

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::error::StorageError;
use crate::{config, dom, storage};

const TOGGLE_ID: &str = "themeToggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Unknown or missing values fall back to light.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn stored() -> Theme {
    Theme::parse(storage::get(config::current().theme_key).as_deref())
}

/// Flips `current` and tries to persist the result. The flip stands even
/// when persisting fails; the error is handed back for logging.
fn toggle<P>(current: &Cell<Theme>, persist: P) -> (Theme, Result<(), StorageError>)
where
    P: FnOnce(Theme) -> Result<(), StorageError>,
{
    let next = current.get().toggled();
    current.set(next);
    (next, persist(next))
}

fn apply(theme: Theme) {
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        root.set_attribute("data-theme", theme.as_str()).ok();
    }
    if let Some(toggle) = dom::element_by_id(TOGGLE_ID) {
        let pressed = if theme == Theme::Dark { "true" } else { "false" };
        toggle.set_attribute("aria-pressed", pressed).ok();
    }
}

/// Applies the saved theme and binds the toggle control if the page has one.
pub fn init() {
    let initial = stored();
    apply(initial);

    let Some(control) = dom::element_by_id(TOGGLE_ID) else {
        return;
    };
    let current = Cell::new(initial);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let (next, saved) = toggle(&current, |theme| {
            storage::set(config::current().theme_key, theme.as_str())
        });
        if let Err(err) = saved {
            gloo_console::warn!(format!("theme not saved: {err}"));
        }
        apply(next);
    });
    control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .ok();
    on_click.forget();
}
