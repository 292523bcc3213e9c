//! API server configuration.

use soothe_core::config::ProviderSettings;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// External reply provider settings.
    pub provider: ProviderSettings,
}

impl ApiConfig {
    /// Builds the config from a bind host/port and resolved provider settings.
    pub fn new(host: &str, port: impl std::fmt::Display, provider: ProviderSettings) -> Self {
        Self {
            bind_addr: format!("{host}:{port}"),
            provider,
        }
    }
}
