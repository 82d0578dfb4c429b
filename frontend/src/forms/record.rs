//! Turns the current field values of a form into a JSON payload.

use serde_json::{Map, Value};

use super::specs::{FieldKind, FormSpec};
use crate::error::ValidationError;

pub type Payload = Map<String, Value>;

/// Anything that can answer "what is in the input named `x`".
pub trait FieldSource {
    fn value(&self, input: &str) -> Option<String>;
}

impl<F> FieldSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn value(&self, input: &str) -> Option<String> {
        self(input)
    }
}

/// Collects and validates a submission.
///
/// Presence is checked for every field before any number is parsed, so an
/// incomplete form always reports "Fill all fields".
pub fn collect<S>(spec: &FormSpec, source: &S) -> Result<Payload, ValidationError>
where
    S: FieldSource + ?Sized,
{
    let values: Vec<String> = spec
        .fields
        .iter()
        .map(|field| {
            let raw = source.value(field.input).unwrap_or_default();
            let raw = raw.trim();
            match field.default {
                Some(default) if raw.is_empty() => default.to_string(),
                _ => raw.to_string(),
            }
        })
        .collect();

    if let Some(field) = spec
        .fields
        .iter()
        .zip(&values)
        .find(|(field, value)| field.required && value.is_empty())
        .map(|(field, _)| field)
    {
        return Err(ValidationError::MissingField { field: field.key });
    }

    let mut payload = Payload::new();
    for (field, value) in spec.fields.iter().zip(values) {
        let json = match field.kind {
            FieldKind::Text => Value::String(value),
            FieldKind::PositiveInt if value.is_empty() => Value::Null,
            FieldKind::PositiveInt => match value.parse::<u64>() {
                Ok(n) if n > 0 => Value::from(n),
                _ => {
                    return Err(ValidationError::NotPositive {
                        field: field.key,
                        label: field.label,
                    })
                }
            },
        };
        payload.insert(field.key.to_string(), json);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::specs::{find, FORMS};
    use serde_json::json;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn donation_payload_uses_numbers() {
        let spec = find("donationForm").unwrap();
        let fields = source(&[("donor", "Alice"), ("qty", "5"), ("location", "Lab")]);
        let payload = collect(spec, &fields).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"donor": "Alice", "qty": 5, "location": "Lab"})
        );
    }

    #[test]
    fn donation_defaults_fill_blanks() {
        let spec = find("donationForm").unwrap();
        let payload = collect(spec, &source(&[("donor", "  "), ("qty", " 3 ")])).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"donor": "Anonymous", "qty": 3, "location": "Campus"})
        );
    }

    #[test]
    fn every_required_field_is_enforced() {
        for spec in FORMS {
            let filled: Vec<(&str, &str)> = spec.fields.iter().map(|f| (f.input, "7")).collect();
            assert!(collect(spec, &source(&filled)).is_ok(), "{}", spec.form_id);

            for field in spec.fields.iter().filter(|f| f.required) {
                let missing: Vec<(&str, &str)> = filled
                    .iter()
                    .copied()
                    .filter(|(name, _)| *name != field.input)
                    .collect();
                let err = collect(spec, &source(&missing)).unwrap_err();
                assert_eq!(err, ValidationError::MissingField { field: field.key });
                assert_eq!(err.to_string(), "Fill all fields");
            }
        }
    }

    #[test]
    fn quantities_must_be_positive_integers() {
        let spec = find("requestForm").unwrap();
        for bad in ["0", "-2", "1.5", "lots"] {
            let err = collect(
                spec,
                &source(&[("name", "Ravi"), ("qty", bad), ("location", "Hall B")]),
            )
            .unwrap_err();
            assert_eq!(err.to_string(), "Quantity must be a positive whole number");
        }
    }

    #[test]
    fn missing_beats_malformed() {
        let spec = find("eventForm").unwrap();
        let fields = source(&[("organizer", "Club"), ("servings", "zero")]);
        let err = collect(spec, &fields).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "contact" });
    }

    #[test]
    fn optional_fields_are_sent_empty() {
        let spec = find("contactForm").unwrap();
        let payload = collect(spec, &source(&[("name", "Jo"), ("msg", "Great work")])).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"name": "Jo", "email": "", "msg": "Great work"})
        );
    }

    #[test]
    fn feed_quantity_stays_text() {
        let spec = find("feedForm").unwrap();
        let payload = collect(
            spec,
            &source(&[("source", "Canteen"), ("qty", "2 kg"), ("location", "Gate 3")]),
        )
        .unwrap();
        assert_eq!(payload["qty"], json!("2 kg"));
    }
}
