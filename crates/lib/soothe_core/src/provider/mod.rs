//! Generative reply providers.
//!
//! A provider turns a prompt into a [`GenerateResponse`]. The response is kept
//! close to the wire shape (`{ text?, candidates? }`) because the provider's
//! schema is versioned outside our control; turning it into reply text is the
//! job of [`extract`].
//!
//! # Providers
//!
//! - [`gemini::GeminiProvider`]: Google Generative Language REST API

pub mod extract;
pub mod gemini;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ProviderSettings;

/// Errors from a single provider call or from provider setup.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response parse error: {0}")]
    Decode(String),
}

/// A provider response as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateResponse {
    /// Top-level generated text, when the provider surfaces one.
    pub text: Option<String>,
    /// Raw candidate list; see [`extract::Extractor::CandidateParts`].
    pub candidates: Option<Value>,
}

impl GenerateResponse {
    /// Response carrying only a direct text field.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            candidates: None,
        }
    }

    /// Picks the known fields out of a JSON body.
    ///
    /// A `text` that is not a string is dropped. `candidates` is kept verbatim.
    pub fn from_json(body: Value) -> Self {
        let Value::Object(mut map) = body else {
            return Self::default();
        };
        let text = match map.remove("text") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        Self {
            text,
            candidates: map.remove("candidates"),
        }
    }
}

/// An external text-generation service.
#[async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Short name for logs and the health endpoint.
    fn name(&self) -> &str;

    /// Requests a single completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, ProviderError>;
}

/// Builds the external provider from startup settings.
///
/// Returns `None` when no API key is configured or when setup fails; in both
/// cases the process runs with local replies only and never retries.
pub fn configure(settings: &ProviderSettings) -> Option<Arc<dyn ReplyProvider>> {
    let Some(api_key) = settings.api_key.as_deref() else {
        info!("GEMINI_API_KEY not set, external reply provider disabled");
        return None;
    };

    match gemini::GeminiProvider::new(api_key, settings) {
        Ok(provider) => {
            info!(
                model = %settings.model,
                base_url = %settings.base_url,
                timeout = ?settings.timeout,
                "external reply provider configured"
            );
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!("could not configure external reply provider: {e}");
            None
        }
    }
}
