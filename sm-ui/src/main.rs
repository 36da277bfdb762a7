//! sm-ui (Web UI) - Session Master collaborator directory and matching assistant
//!
//! Serves the browser UI, the directory JSON API, and the recommendation
//! chat. Artist records come from the remote record store; chat replies
//! come from the hosted model endpoint. All state is transient.

use anyhow::Result;
use clap::Parser;
use sm_common::config::{CliOverrides, Settings};
use sm_ui::clients::{LlmClient, StoreClient};
use sm_ui::{build_router, AppState};
use std::path::PathBuf;
use tracing::info;

/// Session Master web UI module
#[derive(Debug, Parser)]
#[command(name = "sm-ui", version)]
struct Cli {
    /// Listen port (default 5780)
    #[arg(long)]
    port: Option<u16>,

    /// Record store base URL
    #[arg(long)]
    store_url: Option<String>,

    /// Model invocation endpoint URL
    #[arg(long)]
    invoke_url: Option<String>,

    /// API key for the model endpoint
    #[arg(long)]
    invoke_api_key: Option<String>,

    /// Explicit config file path (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl From<Cli> for CliOverrides {
    fn from(cli: Cli) -> Self {
        CliOverrides {
            port: cli.port,
            store_url: cli.store_url,
            invoke_url: cli.invoke_url,
            invoke_api_key: cli.invoke_api_key,
            config_file: cli.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Session Master Web UI (sm-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli.into());
    info!("Record store: {}", settings.store_url);
    info!("Model endpoint: {}", settings.invoke_url);

    let store = StoreClient::new(settings.store_url.clone());
    let llm = LlmClient::new(settings.invoke_url.clone(), settings.invoke_api_key.clone());

    // Create application state and router
    let state = AppState::new(store, llm);

    // Initial roster load; failure degrades to an empty directory
    state.load_roster().await;

    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind(("127.0.0.1", settings.port)).await?;
    info!("sm-ui listening on http://127.0.0.1:{}", settings.port);
    info!("Health check: http://127.0.0.1:{}/health", settings.port);

    axum::serve(listener, app).await?;

    Ok(())
}
