//! Feedback rendering model.
//!
//! Views do not branch on [`Outcome`] themselves; they ask for a [`Banner`]
//! and render it as a dismissible status message.

use std::time::Duration;

use crate::state::Outcome;

/// Delay after which opted-in forms clear a success banner.
pub const SUCCESS_DISMISS: Duration = Duration::from_millis(3000);

/// Per-form texts used when the server does not supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Shown on success when the response has no `message`
    pub success: String,
    /// Shown for every transport failure
    pub transport: String,
    /// Clear a success banner after this long; `None` keeps it until the next edit
    pub auto_dismiss: Option<Duration>,
}

impl Messages {
    pub fn new(success: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            ..Self::default()
        }
    }

    pub fn transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = transport.into();
        self
    }

    pub fn auto_dismiss(mut self, after: Duration) -> Self {
        self.auto_dismiss = Some(after);
        self
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: "Done!".to_string(),
            transport: "Network error! Please try again.".to_string(),
            auto_dismiss: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert success",
            BannerKind::Error => "alert error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn from_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::None => None,
            Outcome::Success(text) => Some(Self {
                kind: BannerKind::Success,
                text: text.clone(),
            }),
            Outcome::Error(text) => Some(Self {
                kind: BannerKind::Error,
                text: text.clone(),
            }),
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.kind.css_class()
    }
}

/// Label for a submit button that is busy while a request is in flight.
pub fn submit_label<'a>(submitting: bool, idle: &'a str, busy: &'a str) -> &'a str {
    if submitting { busy } else { idle }
}
