//! # soothe_api
//!
//! HTTP API library for Soothe.

pub mod config;
pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use soothe_core::reply::ReplyResolver;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chat, health, page};

/// Shared application state passed to all handlers.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Reply resolver, with the external provider if one was configured.
    pub resolver: ReplyResolver,
}

impl AppState {
    pub fn new(config: ApiConfig, resolver: ReplyResolver) -> Self {
        Self { config, resolver }
    }

    /// Configures the external provider (once) and builds the state around it.
    pub fn from_config(config: ApiConfig) -> Self {
        let provider = soothe_core::provider::configure(&config.provider);
        Self::new(config, ReplyResolver::new(provider))
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route(page::SCRIPT_PATH, get(page::script))
        .route("/health", get(health::health))
        .route("/chat", post(chat::chat_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
