//! # travelworld-forms
//!
//! Target-independent core of the TravelWorld site: every form on the site
//! (contact, login, register, forgot/reset password, payment, newsletter) is
//! a [`FormSchema`] plus an [`Endpoint`], driven through the same
//! validate → submit → feedback cycle.
//!
//! ## Architecture
//!
//! - [`schema`] - field descriptors and the ordered form schema
//! - [`validate`] - pure validator over `(schema, values)`
//! - [`state`] - form state holder (values, errors, submitting, outcome)
//! - [`submit`] - HTTP submitter over a pluggable [`Transport`]
//! - [`feedback`] - per-form messages and the banner view model
//! - [`controller`] - drives one submission against a [`StateStore`]
//! - [`catalog`] - the concrete forms of the site
//! - [`newsletter`] - append-only subscription list with injected storage
//! - [`content`] - mocked guides, profile and home-page content
//! - [`config`] - site configuration loaded from TOML
//!
//! Nothing here touches the DOM; the `travelworld-landing` crate supplies the
//! browser transport and storage.
//!
//! ```rust
//! use std::collections::HashMap;
//! use travelworld_forms::{catalog, validate::validate};
//!
//! let form = catalog::register_form();
//! let values = HashMap::from([
//!     ("name".to_string(), "Jane".to_string()),
//!     ("email".to_string(), "jane@x.com".to_string()),
//!     ("username".to_string(), "janex".to_string()),
//!     ("password".to_string(), "secret1".to_string()),
//!     ("passwordConfirmation".to_string(), "other12".to_string()),
//! ]);
//! let errors = validate(&form.schema, &values);
//! assert_eq!(errors["passwordConfirmation"], "Passwords do not match");
//! ```

pub mod catalog;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod newsletter;
pub mod schema;
pub mod state;
pub mod submit;
pub mod validate;

pub use config::SiteConfig;
pub use controller::{FormController, SubmitAttempt};
pub use error::{ConfigError, NewsletterError, StorageError, TransportFailure};
pub use feedback::{Banner, BannerKind, Messages};
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use state::{FieldErrors, FormState, Outcome, StateStore, SubmitRejected};
pub use submit::{
    Endpoint, ErrorBody, HttpRequest, HttpResponse, Method, SubmissionRequest, SubmissionResult,
    Submitter, SuccessBody, Transport,
};
