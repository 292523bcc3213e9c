//! Reply resolution.
//!
//! [`ReplyResolver::resolve`] always produces a reply:
//! 1. the prompt is trimmed, and an empty prompt becomes [`DEFAULT_PROMPT`]
//! 2. with a provider configured, its response is run through the extraction
//!    chain (falling back to the filler reply)
//! 3. a provider error is logged and the local heuristic answers instead

pub mod fallback;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::provider::ReplyProvider;
use crate::provider::extract::extract_reply;
use fallback::{ThreadRngPicker, TipPicker};

/// Prompt used when the submitted message is blank.
pub const DEFAULT_PROMPT: &str = "Hello";

/// Trims `raw`, substituting [`DEFAULT_PROMPT`] when nothing is left.
pub fn normalize_prompt(raw: &str) -> &str {
    match raw.trim() {
        "" => DEFAULT_PROMPT,
        trimmed => trimmed,
    }
}

/// Decides the reply for a message. Cheap to clone and shared across requests.
#[derive(Clone)]
pub struct ReplyResolver {
    provider: Option<Arc<dyn ReplyProvider>>,
    picker: Arc<dyn TipPicker>,
}

impl fmt::Debug for ReplyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplyResolver")
            .field("provider", &self.provider_name())
            .finish_non_exhaustive()
    }
}

impl ReplyResolver {
    /// Resolver using the thread-local RNG for generic tips.
    pub fn new(provider: Option<Arc<dyn ReplyProvider>>) -> Self {
        Self::with_picker(provider, Arc::new(ThreadRngPicker))
    }

    /// Resolver with an explicit tip picker.
    pub fn with_picker(
        provider: Option<Arc<dyn ReplyProvider>>,
        picker: Arc<dyn TipPicker>,
    ) -> Self {
        Self { provider, picker }
    }

    /// Resolver that never calls out.
    pub fn local_only() -> Self {
        Self::new(None)
    }

    /// Whether an external provider was configured at startup.
    pub fn external_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Reply for `raw`. Never fails and never returns an empty string.
    pub async fn resolve(&self, raw: &str) -> String {
        let prompt = normalize_prompt(raw);

        if let Some(provider) = &self.provider {
            match provider.generate(prompt).await {
                Ok(response) => return extract_reply(&response).into_reply(),
                Err(e) => {
                    warn!(provider = provider.name(), "reply provider call failed: {e}");
                }
            }
        }

        debug!("answering with local fallback");
        fallback::local_reply(prompt, self.picker.as_ref()).to_string()
    }
}
