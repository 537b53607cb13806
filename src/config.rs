//! Router configuration.
//!
//! Defaults match the production site: redirect non-Korean browsers from
//! the bare root to `/en/` once per session, and take over scroll
//! restoration from the browser.

use crate::error::{QuadrantError, QuadrantResult};

/// Environment variable toggling the browser-language redirect.
pub const DETECT_LANGUAGE_ENV: &str = "QUADRANT_DETECT_LANGUAGE";
/// Environment variable selecting `manual` or `auto` scroll restoration.
pub const SCROLL_RESTORATION_ENV: &str = "QUADRANT_SCROLL_RESTORATION";

/// Configuration for [`Router`](crate::router::Router).
///
/// # Example
///
/// ```
/// use quadrant::config::RouterConfig;
///
/// let config = RouterConfig::default().with_language_detection(false);
/// assert!(!config.detect_browser_language);
/// assert!(config.manual_scroll_restoration);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Redirect `/` to `/en/` when the browser language is not Korean
    pub detect_browser_language: bool,
    /// Disable the browser's automatic scroll restoration on init
    pub manual_scroll_restoration: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            detect_browser_language: true,
            manual_scroll_restoration: true,
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language_detection(mut self, enabled: bool) -> Self {
        self.detect_browser_language = enabled;
        self
    }

    pub fn with_manual_scroll_restoration(mut self, manual: bool) -> Self {
        self.manual_scroll_restoration = manual;
        self
    }

    /// Read `QUADRANT_DETECT_LANGUAGE` and `QUADRANT_SCROLL_RESTORATION`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> QuadrantResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> QuadrantResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DETECT_LANGUAGE_ENV) {
            config.detect_browser_language = parse_flag(DETECT_LANGUAGE_ENV, &value)?;
        }

        if let Some(value) = lookup(SCROLL_RESTORATION_ENV) {
            config.manual_scroll_restoration = match value.trim().to_ascii_lowercase().as_str() {
                "manual" => true,
                "auto" => false,
                _ => return Err(config_error(SCROLL_RESTORATION_ENV, &value)),
            };
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> QuadrantResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(config_error(key, value)),
    }
}

fn config_error(key: &str, value: &str) -> QuadrantError {
    QuadrantError::Config {
        key: key.to_string(),
        value: value.to_string(),
    }
}
