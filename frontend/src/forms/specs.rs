//! The fixed set of forms the controller knows how to drive.
//!
//! Element ids and input names form the contract with the HTML pages; a page
//! opts into a behaviour simply by containing the matching `<form id=...>`.

use common::requests::Endpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Whole number greater than zero, sent as a JSON number.
    PositiveInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// `name` attribute of the input inside the form.
    pub input: &'static str,
    /// Key in the JSON payload.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Substituted when the input is left empty.
    pub default: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Stores the session marker and leaves for the dashboard right away.
    Login,
    Standard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    pub form_id: &'static str,
    pub endpoint: Endpoint,
    pub kind: FormKind,
    pub fields: &'static [FieldSpec],
    /// Page to open after a successful submission.
    pub follow_up: Option<&'static str>,
}

impl FormSpec {
    pub fn refreshes_dashboard(&self) -> bool {
        self.kind == FormKind::Standard && self.endpoint.affects_dashboard()
    }
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        input: name,
        key: name,
        label,
        kind: FieldKind::Text,
        required: true,
        default: None,
    }
}

const fn optional(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        required: false,
        ..text(name, label)
    }
}

const fn defaulted(name: &'static str, label: &'static str, value: &'static str) -> FieldSpec {
    FieldSpec {
        required: false,
        default: Some(value),
        ..text(name, label)
    }
}

const fn count(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        kind: FieldKind::PositiveInt,
        ..text(name, label)
    }
}

pub const DASHBOARD_PAGE: &str = "dashboard.html";
pub const HOME_PAGE: &str = "index.html";
pub const LOGIN_PAGE: &str = "login.html";

pub const FORMS: &[FormSpec] = &[
    FormSpec {
        form_id: "loginForm",
        endpoint: Endpoint::Login,
        kind: FormKind::Login,
        fields: &[text("username", "Username"), text("password", "Password")],
        follow_up: Some(DASHBOARD_PAGE),
    },
    FormSpec {
        form_id: "signupForm",
        endpoint: Endpoint::Signup,
        kind: FormKind::Standard,
        fields: &[
            text("name", "Name"),
            text("username", "Username"),
            text("password", "Password"),
            text("role", "Role"),
        ],
        follow_up: Some(LOGIN_PAGE),
    },
    FormSpec {
        form_id: "donationForm",
        endpoint: Endpoint::Donate,
        kind: FormKind::Standard,
        fields: &[
            defaulted("donor", "Donor", "Anonymous"),
            count("qty", "Quantity"),
            defaulted("location", "Location", "Campus"),
        ],
        follow_up: Some(DASHBOARD_PAGE),
    },
    FormSpec {
        form_id: "eventForm",
        endpoint: Endpoint::EventDonate,
        kind: FormKind::Standard,
        fields: &[
            text("organizer", "Organizer"),
            text("contact", "Contact"),
            count("servings", "Servings"),
            text("location", "Location"),
        ],
        follow_up: Some(HOME_PAGE),
    },
    FormSpec {
        form_id: "requestForm",
        endpoint: Endpoint::RequestFood,
        kind: FormKind::Standard,
        fields: &[
            text("name", "Name"),
            optional("org", "Organization"),
            count("qty", "Quantity"),
            text("location", "Location"),
        ],
        follow_up: Some(DASHBOARD_PAGE),
    },
    FormSpec {
        form_id: "feedForm",
        endpoint: Endpoint::FeedAnimals,
        kind: FormKind::Standard,
        fields: &[
            text("source", "Source"),
            text("qty", "Quantity"),
            text("location", "Location"),
        ],
        follow_up: Some(HOME_PAGE),
    },
    FormSpec {
        form_id: "contactForm",
        endpoint: Endpoint::Feedback,
        kind: FormKind::Standard,
        fields: &[
            text("name", "Name"),
            optional("email", "Email"),
            text("msg", "Message"),
        ],
        follow_up: None,
    },
    FormSpec {
        form_id: "contactForm2",
        endpoint: Endpoint::Contact,
        kind: FormKind::Standard,
        fields: &[
            text("name", "Name"),
            optional("email", "Email"),
            text("msg", "Message"),
        ],
        follow_up: None,
    },
];

#[cfg(test)]
pub fn find(form_id: &str) -> Option<&'static FormSpec> {
    FORMS.iter().find(|spec| spec.form_id == form_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::requests::Method;
    use std::collections::HashSet;

    #[test]
    fn form_ids_are_unique() {
        let ids: HashSet<_> = FORMS.iter().map(|f| f.form_id).collect();
        assert_eq!(ids.len(), FORMS.len());
    }

    #[test]
    fn payload_keys_are_unique_per_form() {
        for spec in FORMS {
            let keys: HashSet<_> = spec.fields.iter().map(|f| f.key).collect();
            assert_eq!(keys.len(), spec.fields.len(), "{}", spec.form_id);
        }
    }

    #[test]
    fn only_counter_forms_refresh_the_dashboard() {
        let refreshing: Vec<_> = FORMS
            .iter()
            .filter(|f| f.refreshes_dashboard())
            .map(|f| f.form_id)
            .collect();
        assert_eq!(refreshing, ["donationForm", "eventForm", "requestForm"]);
    }

    #[test]
    fn numeric_fields() {
        let event = find("eventForm").unwrap();
        let servings = event.fields.iter().find(|f| f.key == "servings").unwrap();
        assert_eq!(servings.kind, FieldKind::PositiveInt);

        let feed = find("feedForm").unwrap();
        assert!(feed.fields.iter().all(|f| f.kind == FieldKind::Text));
    }

    #[test]
    fn defaults_only_on_donation() {
        let donation = find("donationForm").unwrap();
        let defaults: Vec<_> = donation
            .fields
            .iter()
            .filter_map(|f| f.default.map(|d| (f.key, d)))
            .collect();
        assert_eq!(defaults, [("donor", "Anonymous"), ("location", "Campus")]);
        assert!(find("nope").is_none());
    }

    #[test]
    fn every_form_posts() {
        for spec in FORMS {
            assert_eq!(spec.endpoint.method(), Method::Post, "{}", spec.form_id);
        }
    }
}
