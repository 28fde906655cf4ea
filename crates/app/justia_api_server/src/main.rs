//! Justia HTTP API server binary.
//!
//! Serves the JSON API on `BIND_ADDR` (or `--host`/`--port`). Replies come
//! from the Anthropic API when `ANTHROPIC_API_KEY` is set and from the
//! offline responder otherwise.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use justia_api::{AppState, config::ApiConfig};
use justia_core::assistant::Assistant;
use justia_core::data::ReferenceData;
use justia_core::provider::{AnthropicProvider, ChatProvider, ProviderConfig};
use tracing::{info, warn};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "justia_api_server", about = "Justia legal information API server")]
struct Args {
    /// Interface to bind. Overrides the host part of `BIND_ADDR`.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (0 = ephemeral). Overrides the port part of `BIND_ADDR`.
    #[arg(long)]
    port: Option<u16>,

    /// Anthropic model id.
    #[arg(long, env = "ANTHROPIC_MODEL")]
    model: Option<String>,

    /// Simulated eCourts latency in milliseconds.
    #[arg(long, env = "COURT_LOOKUP_DELAY_MS")]
    court_lookup_delay_ms: Option<u64>,

    /// Never call the AI provider, even when a key is configured.
    #[arg(long, default_value_t = false)]
    mock_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,justia_api=debug,justia_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env();
    if args.host.is_some() || args.port.is_some() {
        config.bind_addr = format!(
            "{}:{}",
            args.host.as_deref().unwrap_or(DEFAULT_HOST),
            args.port.unwrap_or(DEFAULT_PORT)
        );
    }
    if let Some(ms) = args.court_lookup_delay_ms {
        config.court_lookup_delay = Duration::from_millis(ms);
    }

    let data = Arc::new(ReferenceData::embedded()?);
    info!(
        states = data.states().len(),
        case_types = data.case_types().len(),
        "reference data loaded"
    );

    let provider = if args.mock_only {
        info!("mock-only mode requested");
        None
    } else {
        build_provider(args.model)
    };
    let assistant = Assistant::new(data, provider);
    info!(ai_enabled = assistant.ai_enabled(), "starting justia_api_server");

    let state = AppState {
        assistant,
        config: config.clone(),
    };
    let app = justia_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Anthropic client from the environment, or `None` for mock-only mode.
fn build_provider(model: Option<String>) -> Option<Arc<dyn ChatProvider>> {
    let Some(mut config) = ProviderConfig::from_env() else {
        info!("ANTHROPIC_API_KEY not set, using offline replies only");
        return None;
    };
    if let Some(model) = model {
        config.model = model;
    }

    match AnthropicProvider::new(config) {
        Ok(provider) => {
            info!(model = provider.model(), "Anthropic provider configured");
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!(error = %e, "failed to configure Anthropic provider, using offline replies");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
