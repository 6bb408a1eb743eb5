//! Newsletter subscriptions.
//!
//! The list is append-only: entries are never removed, edited or
//! deduplicated. It is owned by whoever creates it (the Home view in the
//! site) and persisted through a [`KeyValueStore`] as one JSON array under
//! one key, e.g. `[{"email":"a@b.co","date":"2026-01-01T00:00:00Z"}]`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{NewsletterError, StorageError};
use crate::feedback::{Messages, SUCCESS_DISMISS};
use crate::schema::{FieldKind, FieldSpec, FormSchema};
use crate::state::{FormState, SubmitRejected};
use crate::submit::SubmissionResult;
use crate::validate::validate_field;

/// Storage key used by the site.
pub const DEFAULT_KEY: &str = "subscriptions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub email: String,
    pub date: DateTime<Utc>,
}

/// String key-value storage (browser `localStorage` in the site).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store; shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn schema() -> Arc<FormSchema> {
    Arc::new(
        FormSchema::new().field(
            FieldSpec::new("email", FieldKind::Email)
                .required()
                .label("Email")
                .placeholder("Enter your email"),
        ),
    )
}

/// "Subscribed ✓" for three seconds.
pub fn messages() -> Messages {
    Messages::new("Subscribed ✓").auto_dismiss(SUCCESS_DISMISS)
}

#[derive(Debug)]
pub struct SubscriptionList<K> {
    entries: Vec<Subscription>,
    store: K,
    key: String,
    /// False when existing data could not be read; we then never overwrite it
    writable: bool,
}

impl<K: KeyValueStore> SubscriptionList<K> {
    /// Load the list stored under `key`, or start empty.
    pub fn open(store: K, key: impl Into<String>) -> Self {
        let key = key.into();
        let (entries, writable) = match Self::load(&store, &key) {
            Ok(entries) => (entries, true),
            Err(e) => {
                warn!(%key, error = %e, "newsletter list unreadable, keeping it read-only");
                (Vec::new(), false)
            }
        };
        Self {
            entries,
            store,
            key,
            writable,
        }
    }

    fn load(store: &K, key: &str) -> Result<Vec<Subscription>, StorageError> {
        match store.get(key)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
        }
    }

    pub fn entries(&self) -> &[Subscription] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `email` stamped with `at`. Storage failures are logged; the
    /// entry is kept in memory either way.
    pub fn subscribe(
        &mut self,
        email: &str,
        at: DateTime<Utc>,
    ) -> Result<Subscription, NewsletterError> {
        let values = HashMap::from([("email".to_string(), email.to_string())]);
        if let Some(message) = validate_field(&schema(), &values, "email") {
            return Err(NewsletterError::InvalidEmail(message));
        }

        let entry = Subscription {
            email: email.trim().to_string(),
            date: at,
        };
        self.entries.push(entry.clone());
        info!(total = self.entries.len(), "newsletter subscription added");

        if let Err(e) = self.persist() {
            warn!(key = %self.key, error = %e, "newsletter list not persisted");
        }
        Ok(entry)
    }

    fn persist(&self) -> Result<(), StorageError> {
        if !self.writable {
            return Err(StorageError::Unavailable);
        }
        let raw = serde_json::to_string(&self.entries)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }
}

/// Run the newsletter form: validate, append, show the success outcome.
pub fn submit_signup<K: KeyValueStore>(
    state: &mut FormState,
    list: &mut SubscriptionList<K>,
    at: DateTime<Utc>,
) -> Result<Subscription, SubmitRejected> {
    let body = state.begin_submit()?;
    let email = body
        .get("email")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match list.subscribe(&email, at) {
        Ok(entry) => {
            state.complete(SubmissionResult::Ok(None), &messages());
            Ok(entry)
        }
        Err(e) => {
            let message = e.to_string();
            state.complete(SubmissionResult::DomainError(message.clone()), &messages());
            Err(SubmitRejected::Invalid(
                [("email".to_string(), message)].into_iter().collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Outcome;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_790_000_000 + secs, 0).unwrap()
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn appends_with_timestamp_and_persists() {
        let store = MemoryStore::default();
        let mut list = SubscriptionList::open(store.clone(), DEFAULT_KEY);
        list.subscribe("jane@x.com", at(0)).unwrap();
        list.subscribe("john@y.org", at(5)).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[1].date, at(5));

        let reopened = SubscriptionList::open(store, DEFAULT_KEY);
        assert_eq!(reopened.entries(), list.entries());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut list = SubscriptionList::open(MemoryStore::default(), DEFAULT_KEY);
        list.subscribe("jane@x.com", at(0)).unwrap();
        list.subscribe("jane@x.com", at(1)).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn invalid_email_is_not_appended() {
        let mut list = SubscriptionList::open(MemoryStore::default(), DEFAULT_KEY);
        let err = list.subscribe("not-an-email", at(0)).unwrap_err();
        assert_eq!(err, NewsletterError::InvalidEmail("Please enter a valid email".into()));
        assert!(list.is_empty());
    }

    #[test]
    fn reads_browser_written_entries() {
        let store = MemoryStore::default();
        store
            .set(
                DEFAULT_KEY,
                r#"[{"email":"old@x.com","date":"2025-06-01T10:00:00.000Z"}]"#,
            )
            .unwrap();
        let mut list = SubscriptionList::open(store, DEFAULT_KEY);
        list.subscribe("new@x.com", at(0)).unwrap();
        assert_eq!(list.entries()[0].email, "old@x.com");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn corrupt_data_is_never_overwritten() {
        let store = MemoryStore::default();
        store.set(DEFAULT_KEY, "{not json").unwrap();
        let mut list = SubscriptionList::open(store.clone(), DEFAULT_KEY);
        list.subscribe("jane@x.com", at(0)).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(store.get(DEFAULT_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn storage_failure_keeps_entry_in_memory() {
        let mut list = SubscriptionList::open(BrokenStore, DEFAULT_KEY);
        assert!(list.subscribe("jane@x.com", at(0)).is_ok());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn one_list_outlives_each_signup_form() {
        let store = MemoryStore::default();
        store.set(DEFAULT_KEY, "{not json").unwrap();
        let mut list = SubscriptionList::open(store, DEFAULT_KEY);

        for (i, email) in ["jane@x.com", "john@y.org"].into_iter().enumerate() {
            let mut state = FormState::new(schema());
            state.input("email", email);
            submit_signup(&mut state, &mut list, at(i as i64)).unwrap();
        }

        let emails: Vec<&str> = list.entries().iter().map(|e| e.email.as_str()).collect();
        assert_eq!(emails, ["jane@x.com", "john@y.org"]);
    }

    #[test]
    fn signup_form_flow() {
        let mut state = FormState::new(schema());
        let mut list = SubscriptionList::open(MemoryStore::default(), DEFAULT_KEY);

        let rejected = submit_signup(&mut state, &mut list, at(0)).unwrap_err();
        assert!(matches!(rejected, SubmitRejected::Invalid(_)));
        assert!(list.is_empty());

        state.input("email", "jane@x.com");
        let entry = submit_signup(&mut state, &mut list, at(1)).unwrap();
        assert_eq!(entry.email, "jane@x.com");
        assert_eq!(state.outcome(), &Outcome::Success("Subscribed ✓".into()));
        assert_eq!(state.value("email"), "");
        assert!(!state.is_submitting());
    }
}
