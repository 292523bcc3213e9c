//! Reply provider settings.
//!
//! Resolved once at process start from environment variables. The resulting
//! value is immutable and handed to [`crate::provider::configure`].

use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Settings for the external generative reply provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// API key; `None` disables the external provider.
    pub api_key: Option<String>,
    /// Model name, e.g. `"gemini-1.5-flash"`.
    pub model: String,
    /// API root without a trailing slash.
    pub base_url: String,
    /// Upper bound on a single generate call.
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProviderSettings {
    /// Reads settings from environment variables.
    ///
    /// | Variable              | Default                                     |
    /// |-----------------------|---------------------------------------------|
    /// | `GEMINI_API_KEY`      | unset (provider disabled)                   |
    /// | `GEMINI_MODEL`        | `gemini-1.5-flash`                          |
    /// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_TIMEOUT_SECS` | `8`                                         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Blank values count as unset. An unparsable timeout falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout_secs = non_blank("GEMINI_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key: non_blank("GEMINI_API_KEY"),
            model: non_blank("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Whether an API key is present at all.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
