//! Gemini reply provider.
//!
//! Calls `POST {base_url}/v1beta/models/{model}:generateContent` with the API
//! key in the `x-goog-api-key` header. One attempt per prompt, bounded by the
//! configured timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

use super::{GenerateResponse, ProviderError, ReplyProvider};
use crate::config::ProviderSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    candidate_count: u8,
}

impl<'a> GenerateRequest<'a> {
    fn single(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig { candidate_count: 1 },
        }
    }
}

/// Google Generative Language API client for one model.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl GeminiProvider {
    /// Builds the HTTP client. Fails when the key is not a valid header value
    /// or the client cannot be constructed.
    pub fn new(api_key: &str, settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| ProviderError::Config("API key is not a valid header value".into()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ProviderError::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                settings.base_url, settings.model
            ),
            model: settings.model.clone(),
            timeout: settings.timeout,
        })
    }

    /// Full URL of the `generateContent` call.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(self.timeout)
        } else {
            ProviderError::Request(e.to_string())
        }
    }
}

#[async_trait]
impl ReplyProvider for GeminiProvider {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, ProviderError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest::single(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ProviderError::Status { status, body });
        }

        let body: Value = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout)
            } else {
                ProviderError::Decode(e.to_string())
            }
        })?;

        Ok(GenerateResponse::from_json(body))
    }
}
