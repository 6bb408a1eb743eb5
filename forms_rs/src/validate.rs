//! Pure field validation.
//!
//! `validate` maps `(schema, values)` to the errors of every failing field;
//! an empty map means the form may be submitted. Fields absent from `values`
//! are validated as empty strings.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::{FieldKind, FieldSpec, FormSchema};

/// Field name → message, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

pub const INVALID_EMAIL: &str = "Please enter a valid email";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Something, one `@`, something, a `.`, something. Not RFC 5322.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

fn value_of<'a>(values: &'a HashMap<String, String>, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or("")
}

fn check(spec: &FieldSpec, values: &HashMap<String, String>) -> Option<String> {
    let value = value_of(values, &spec.name);
    let blank = value.trim().is_empty();

    // A differing confirmation is reported as a mismatch even when blank.
    if let FieldKind::PasswordConfirm { of } = &spec.kind {
        if value != value_of(values, of) {
            return Some(PASSWORD_MISMATCH.to_string());
        }
    }

    if blank {
        return spec
            .required
            .then(|| format!("{} is required", spec.label));
    }

    match &spec.kind {
        FieldKind::Email if !is_valid_email(value) => Some(INVALID_EMAIL.to_string()),
        FieldKind::Password { min_len } if value.chars().count() < *min_len => Some(format!(
            "Password must be at least {min_len} characters"
        )),
        _ => None,
    }
}

/// Validate every field of `schema`.
pub fn validate(schema: &FormSchema, values: &HashMap<String, String>) -> FieldErrors {
    schema
        .fields()
        .iter()
        .filter_map(|spec| check(spec, values).map(|msg| (spec.name.clone(), msg)))
        .collect()
}

/// Validate a single field; `None` when it passes or is not in the schema.
pub fn validate_field(
    schema: &FormSchema,
    values: &HashMap<String, String>,
    name: &str,
) -> Option<String> {
    schema.get(name).and_then(|spec| check(spec, values))
}
