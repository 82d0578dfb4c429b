use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

use super::effects::{self, Effect};
use super::guard::{InFlight, InFlightGuard};
use super::record;
use super::specs::FormSpec;
use crate::{api, config, dashboard, dom, notifier, session};

/// Attaches the submit handler for `spec`. Returns `false` when the page has
/// no such form, which is the normal case for pages that share this script.
pub fn bind_form(spec: &'static FormSpec) -> bool {
    let Some(form) = dom::element_by_id(spec.form_id)
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        return false;
    };

    let in_flight = InFlight::default();
    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let Some(guard) = in_flight.try_begin() else {
            gloo_console::log!(format!("{}: submission already in flight", spec.form_id));
            return;
        };
        submit(spec, target.clone(), guard);
    });

    if form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .is_err()
    {
        gloo_console::error!(format!("{}: could not attach submit handler", spec.form_id));
        return false;
    }
    on_submit.forget();
    true
}

fn submit(spec: &'static FormSpec, form: HtmlFormElement, guard: InFlightGuard) {
    let fields = |name: &str| dom::field_value(&form, name);
    let payload = match record::collect(spec, &fields) {
        Ok(payload) => payload,
        Err(err) => {
            apply(&form, effects::plan_invalid(&err));
            return;
        }
    };

    dom::set_busy(&form, true);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = api::post_json(spec.endpoint, &payload).await;
        drop(guard);
        dom::set_busy(&form, false);
        let delay_ms = config::current().redirect_delay_ms;
        apply(&form, effects::plan(spec, &outcome, delay_ms));
    });
}

fn apply(form: &HtmlFormElement, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::ResetForm => dom::clear_form(form),
            Effect::Notify { message, is_error } => notifier::notify(&message, is_error),
            Effect::RefreshDashboard => wasm_bindgen_futures::spawn_local(dashboard::refresh()),
            Effect::StoreSession(user) => session::store_user(&user),
            Effect::Navigate { page, delay_ms } => dom::navigate_after(page, delay_ms),
        }
    }
}
