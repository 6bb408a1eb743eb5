//! Site configuration.
//!
//! Parsed from a small TOML document (the site embeds `site.toml`). Every
//! key is optional; a missing or broken document yields the defaults.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;
use crate::newsletter::DEFAULT_KEY;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix joined to every endpoint path; empty means same origin
    pub api_base: String,
    /// Requests without a response after this long become transport errors
    pub request_timeout_ms: u64,
    /// Browser storage key of the newsletter list
    pub newsletter_key: String,
    /// Delay before an auto-dismissing success banner disappears
    pub success_dismiss_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            request_timeout_ms: 10_000,
            newsletter_key: DEFAULT_KEY.to_string(),
            success_dismiss_ms: 3_000,
        }
    }
}

impl SiteConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse `content`, falling back to defaults on error.
    pub fn load_from_str(content: &str) -> Self {
        match Self::parse(content) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "invalid site config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace `api_base` when an override is given (build-time env in the site).
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.filter(|b| !b.is_empty()) {
            self.api_base = base.to_string();
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.newsletter_key, "subscriptions");
        assert_eq!(config.success_dismiss(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_config() {
        let config = SiteConfig::load_from_str(
            r#"
api_base = "https://api.travelworld.example"
request_timeout_ms = 2500
"#,
        );
        assert_eq!(config.api_base, "https://api.travelworld.example");
        assert_eq!(config.request_timeout(), Duration::from_millis(2500));
        assert_eq!(config.newsletter_key, "subscriptions");
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(SiteConfig::load_from_str(""), SiteConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert!(SiteConfig::parse("request_timeout_ms = \"soon\"").is_err());
        assert_eq!(
            SiteConfig::load_from_str("request_timeout_ms = \"soon\""),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_api_base_override() {
        let config = SiteConfig::default().with_api_base(Some("/v2"));
        assert_eq!(config.api_base, "/v2");
        let config = config.with_api_base(Some(""));
        assert_eq!(config.api_base, "/v2");
        let config = config.with_api_base(None);
        assert_eq!(config.api_base, "/v2");
    }
}
