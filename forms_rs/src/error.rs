//! Error types shared across the crate.
//!
//! Validation problems are not errors in this sense: they are data
//! ([`crate::FieldErrors`]) shown next to the fields.

use std::time::Duration;

use thiserror::Error;

/// The HTTP exchange could not be completed; no response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// Connection, DNS or fetch-level failure
    #[error("network failure: {0}")]
    Network(String),
    /// No response within the configured timeout
    #[error("request timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
    /// Request could not be built (body encoding, invalid header)
    #[error("request could not be encoded: {0}")]
    Encode(String),
}

/// Failure of the storage collaborator behind the newsletter list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read storage: {0}")]
    Read(String),
    #[error("failed to write storage: {0}")]
    Write(String),
    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsletterError {
    /// The address failed the newsletter schema; carries the field message
    #[error("{0}")]
    InvalidEmail(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}
