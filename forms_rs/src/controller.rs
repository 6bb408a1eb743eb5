//! One submission, start to finish.
//!
//! [`FormController`] ties a [`StateStore`] to a [`Submitter`] and a
//! [`FormDefinition`]. It owns no state of its own, so cloning it into an
//! event handler or a spawned future is cheap.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::catalog::FormDefinition;
use crate::state::{Outcome, StateStore, SubmitRejected};
use crate::submit::{Submitter, Transport};

/// What happened to a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed or a request was already in flight; no call made
    Rejected(SubmitRejected),
    /// One request was made and its outcome applied
    Completed { outcome: Outcome, seq: u64 },
    /// The state went away before the submission finished
    Detached,
}

#[derive(Debug, Clone)]
pub struct FormController<S, T> {
    store: S,
    submitter: Submitter<T>,
    definition: Arc<FormDefinition>,
}

impl<S: StateStore, T: Transport> FormController<S, T> {
    pub fn new(store: S, submitter: Submitter<T>, definition: Arc<FormDefinition>) -> Self {
        Self {
            store,
            submitter,
            definition,
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn input(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.store.with_state(|state| state.input(name, value));
    }

    pub fn toggle(&self, name: &str, checked: bool) {
        self.store.with_state(|state| state.toggle(name, checked));
    }

    /// Validate, send at most one request, apply its result.
    pub async fn submit(&self) -> SubmitAttempt {
        let body = match self.store.with_state(|state| state.begin_submit()) {
            None => return SubmitAttempt::Detached,
            Some(Err(rejected)) => {
                debug!(path = %self.definition.endpoint.path, ?rejected, "submit rejected");
                return SubmitAttempt::Rejected(rejected);
            }
            Some(Ok(body)) => body,
        };

        let result = self.submitter.submit(&self.definition.endpoint, &body).await;

        let messages = &self.definition.messages;
        self.store
            .with_state(|state| {
                let outcome = state.complete(result, messages).clone();
                SubmitAttempt::Completed {
                    outcome,
                    seq: state.outcome_seq(),
                }
            })
            .unwrap_or(SubmitAttempt::Detached)
    }

    /// When `attempt` produced a success and this form auto-dismisses, the
    /// delay and the outcome number to pass to [`FormController::dismiss`].
    pub fn auto_dismiss(&self, attempt: &SubmitAttempt) -> Option<(Duration, u64)> {
        match attempt {
            SubmitAttempt::Completed { outcome, seq } if outcome.is_success() => {
                self.definition.messages.auto_dismiss.map(|after| (after, *seq))
            }
            _ => None,
        }
    }

    pub fn dismiss(&self, seq: u64) -> bool {
        self.store
            .with_state(|state| state.dismiss(seq))
            .unwrap_or(false)
    }
}
