use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::{self, Config};
use crate::{dashboard, dom, forms, map, session, theme};

/// Boots the controller once the document is parsed.
pub fn start() {
    let Some(document) = dom::document() else {
        gloo_console::error!("no document; controller not started");
        return;
    };

    if document.ready_state() != "loading" {
        boot();
        return;
    }

    let on_ready = Closure::once_into_js(boot);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .is_err()
    {
        gloo_console::error!("could not wait for DOMContentLoaded");
    }
}

fn boot() {
    config::install(Config::from_document());
    theme::init();
    session::init();

    let bound = forms::bind_all();
    gloo_console::log!(format!("Save N Serve controller ready: {bound} form(s) bound"));

    map::init();
    wasm_bindgen_futures::spawn_local(dashboard::refresh());
}
