//! Declarative form description.
//!
//! A [`FormSchema`] is an ordered list of [`FieldSpec`]s. Order matters only
//! for rendering and for the order errors are reported in; names are unique.

use serde::{Deserialize, Serialize};

/// Default minimum length for `password` fields.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Semantic kind of a field; selects which validation rules apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum FieldKind {
    Text,
    Email,
    /// Password with a minimum character count
    Password { min_len: usize },
    /// Must equal the current value of the named field
    PasswordConfirm { of: String },
    /// Checkbox; value is `"true"` when checked, `""` otherwise
    Flag,
}

impl FieldKind {
    pub fn password() -> Self {
        FieldKind::Password {
            min_len: MIN_PASSWORD_LEN,
        }
    }

    pub fn confirm(of: impl Into<String>) -> Self {
        FieldKind::PasswordConfirm { of: of.into() }
    }

    /// HTML `type` attribute for the input rendering this kind.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password { .. } | FieldKind::PasswordConfirm { .. } => "password",
            FieldKind::Flag => "checkbox",
        }
    }
}

/// One field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Human label, used in "X is required"
    pub label: String,
    /// JSON key in the request body when it differs from `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wire_name: Option<String>,
    /// Rendered and validated, never sent
    #[serde(default)]
    pub ui_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Render as a multi-line textarea
    #[serde(default)]
    pub multiline: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            kind,
            required: false,
            wire_name: None,
            ui_only: false,
            placeholder: None,
            multiline: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn wire_name(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    pub fn ui_only(mut self) -> Self {
        self.ui_only = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Key used for this field in the request body.
    pub fn wire_key(&self) -> &str {
        self.wire_name.as_deref().unwrap_or(&self.name)
    }

    /// Name of the field this one must match, if any.
    pub fn depends_on(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::PasswordConfirm { of } => Some(of.as_str()),
            _ => None,
        }
    }
}

/// Ordered, name-unique list of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. A later field with an existing name replaces the
    /// earlier descriptor in place so names stay unique.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.fields.push(spec),
        }
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Fields whose validity depends on `name` (confirm fields referencing it).
    pub fn dependents_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldSpec> {
        self.fields
            .iter()
            .filter(move |f| f.depends_on() == Some(name))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
