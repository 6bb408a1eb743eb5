//! Form state holder.
//!
//! `{values, errors, submitting, outcome}` is the whole state; the methods
//! below are the complete transition table:
//!
//! | event | effect |
//! |---|---|
//! | `input` | set value, clear outcome, re-check errored field (and errored dependents) |
//! | `begin_submit`, busy | rejected, nothing changes |
//! | `begin_submit`, invalid | all errors surfaced, not submitting |
//! | `begin_submit`, valid | submitting, outcome cleared, request built |
//! | `complete(Ok)` | success outcome, values reset |
//! | `complete(Err)` | error outcome, values kept |
//! | `dismiss` | outcome cleared if it is still the one named |

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::feedback::Messages;
use crate::schema::{FieldKind, FormSchema};
use crate::submit::{SubmissionRequest, SubmissionResult};
use crate::validate::{validate, validate_field};

pub use crate::validate::FieldErrors;

/// What the user is currently told about the last submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Outcome {
    pub fn is_none(&self) -> bool {
        matches!(self, Outcome::None)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Why `begin_submit` did not start a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// At least one field failed; errors are also stored on the state
    Invalid(FieldErrors),
    /// A request for this form is already in flight
    InFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: Arc<FormSchema>,
    values: HashMap<String, String>,
    errors: FieldErrors,
    submitting: bool,
    outcome: Outcome,
    outcome_seq: u64,
    context: SubmissionRequest,
}

impl FormState {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        let values = schema
            .names()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            submitting: false,
            outcome: Outcome::None,
            outcome_seq: 0,
            context: SubmissionRequest::new(),
        }
    }

    /// Fixed value sent with every submission but never edited or validated.
    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context.insert(key, value);
        self
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Incremented every time an outcome is set.
    pub fn outcome_seq(&self) -> u64 {
        self.outcome_seq
    }

    /// Keystroke: store the value and re-check only fields already in error.
    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        if self.schema.get(name).is_none() {
            debug!(field = name, "input for unknown field ignored");
            return;
        }
        self.values.insert(name.to_string(), value.into());
        self.outcome = Outcome::None;

        let mut recheck = vec![name.to_string()];
        recheck.extend(self.schema.dependents_of(name).map(|f| f.name.clone()));
        for field in recheck {
            if !self.errors.contains_key(&field) {
                continue;
            }
            match validate_field(&self.schema, &self.values, &field) {
                Some(message) => {
                    self.errors.insert(field, message);
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
    }

    /// Checkbox convenience over [`FormState::input`].
    pub fn toggle(&mut self, name: &str, checked: bool) {
        self.input(name, if checked { "true" } else { "" });
    }

    /// Validate everything and, if clean, mark the form as submitting and
    /// return the request body.
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }

        self.errors = validate(&self.schema, &self.values);
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.submitting = true;
        self.outcome = Outcome::None;
        Ok(self.request_body())
    }

    fn request_body(&self) -> SubmissionRequest {
        let mut body = SubmissionRequest::new();
        for spec in self.schema.fields().iter().filter(|f| !f.ui_only) {
            let raw = self.value(&spec.name);
            let value = match spec.kind {
                FieldKind::Flag => Value::Bool(raw == "true"),
                _ => Value::String(raw.to_string()),
            };
            body.insert(spec.wire_key(), value);
        }
        for key in self.context.keys() {
            if let Some(value) = self.context.get(key) {
                body.insert(key, value.clone());
            }
        }
        body
    }

    /// Apply the single result of the in-flight request.
    pub fn complete(&mut self, result: SubmissionResult, messages: &Messages) -> &Outcome {
        self.submitting = false;
        self.outcome_seq += 1;
        self.outcome = match result {
            SubmissionResult::Ok(message) => {
                for value in self.values.values_mut() {
                    value.clear();
                }
                self.errors.clear();
                Outcome::Success(message.unwrap_or_else(|| messages.success.clone()))
            }
            SubmissionResult::DomainError(message) => Outcome::Error(message),
            SubmissionResult::TransportError => Outcome::Error(messages.transport.clone()),
        };
        &self.outcome
    }

    /// Clear the outcome, but only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if seq != self.outcome_seq || self.outcome.is_none() {
            return false;
        }
        self.outcome = Outcome::None;
        true
    }
}

/// Somewhere a [`FormState`] lives: a `RefCell` natively, a reactive signal
/// in the browser. Returns `None` when the state is gone (view unmounted).
pub trait StateStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl StateStore for Rc<RefCell<FormState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
