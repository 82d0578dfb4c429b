//! Form binding: one submit handler per known form present on the page.
//!
//! - `specs`: the form table (ids, endpoints, fields, follow-up pages).
//! - `record`: field collection and presence/number validation.
//! - `effects`: pure planning of what a settled submission does to the page.
//! - `guard`: the one-request-per-form flag.
//! - `binder`: the DOM side: listeners, busy state and effect application.

mod binder;
mod effects;
mod guard;
mod record;
mod specs;

pub use specs::LOGIN_PAGE;

/// Binds every known form found in the document and returns how many were bound.
pub fn bind_all() -> usize {
    specs::FORMS
        .iter()
        .filter(|spec| binder::bind_form(*spec))
        .count()
}
