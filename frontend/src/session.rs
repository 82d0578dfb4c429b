//! The `sns_user` session marker written after login.

use common::model::session::SessionUser;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::forms::LOGIN_PAGE;
use crate::{config, dom, storage};

const WELCOME_ID: &str = "welcomeUser";
const LOGOUT_ID: &str = "logoutBtn";

pub fn store_user(user: &SessionUser) {
    if let Err(err) = storage::set_json(config::current().user_key, user) {
        gloo_console::error!(err.to_string());
    }
}

/// The stored user, if any. A corrupt marker counts as logged out.
pub fn current_user() -> Option<SessionUser> {
    match storage::get_json::<SessionUser>(config::current().user_key) {
        Ok(user) => user,
        Err(err) => {
            gloo_console::warn!(err.to_string());
            None
        }
    }
}

pub fn clear() {
    storage::remove(config::current().user_key);
}

/// Greets the stored user and wires the logout control, where the page has them.
pub fn init() {
    if let Some(name) = current_user().as_ref().and_then(SessionUser::display_name) {
        dom::set_text(WELCOME_ID, name);
    }

    let Some(logout) = dom::element_by_id(LOGOUT_ID) else {
        return;
    };
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        clear();
        dom::navigate_to(LOGIN_PAGE);
    });
    logout
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .ok();
    on_click.forget();
}
