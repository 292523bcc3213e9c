//! Soothe chat server binary.
//!
//! Serves the chat page and `POST /chat` until interrupted.

pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use soothe_api::config::ApiConfig;
use soothe_core::config::ProviderSettings;
use tracing::info;

/// CLI arguments for the chat server.
///
/// Provider settings come from `GEMINI_API_KEY`, `GEMINI_MODEL`,
/// `GEMINI_BASE_URL` and `GEMINI_TIMEOUT_SECS`.
#[derive(Parser, Debug)]
#[command(name = "soothe_server", version, about = "Soothe chat server")]
struct Args {
    /// Host to bind.
    #[arg(long, env = "SOOTHE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "SOOTHE_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,soothe_api=debug,soothe_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig::new(&args.host, args.port, ProviderSettings::from_env());
    info!(
        bind_addr = %config.bind_addr,
        api_key_present = config.provider.has_api_key(),
        "starting soothe_server"
    );

    let state = soothe_api::AppState::from_config(config.clone());
    let app = soothe_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| Error::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    info!(url = %format!("http://{local_addr}"), "chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chat server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("could not listen for ctrl-c, running until killed: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
