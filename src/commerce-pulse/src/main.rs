//! Commerce Pulse — e-commerce funnel analytics service.
//!
//! Main entry point that wires the event store, funnel service, presenter,
//! and API server.

use clap::Parser;
use pulse_api::ApiServer;
use pulse_core::config::AppConfig;
use pulse_events::{ClickHouseEventStore, EventStore, InMemoryEventStore};
use pulse_presenter::{FunnelPresenter, FunnelTheme};
use pulse_reporting::FunnelService;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "commerce-pulse")]
#[command(about = "E-commerce funnel analytics service")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "COMMERCE_PULSE__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "COMMERCE_PULSE__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Funnel theme preset (overrides config)
    #[arg(long, env = "COMMERCE_PULSE__FUNNEL__THEME")]
    theme: Option<String>,

    /// Serve from a seeded in-memory event store instead of ClickHouse
    #[arg(long, default_value_t = false)]
    demo: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commerce_pulse=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Commerce Pulse starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(theme) = cli.theme {
        config.funnel.theme = theme;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        theme = %config.funnel.theme,
        "Configuration loaded"
    );

    // Select the event store backing the funnel counts
    let store: Arc<dyn EventStore> = if cli.demo {
        info!("Running in demo mode with an in-memory event store");
        Arc::new(InMemoryEventStore::with_demo_data(
            config.clickhouse.recent_window_hours,
        ))
    } else {
        Arc::new(ClickHouseEventStore::new(&config.clickhouse))
    };

    let funnel = Arc::new(FunnelService::new(store));

    // Resolve the configured theme preset
    let theme = FunnelTheme::from_name(&config.funnel.theme).unwrap_or_else(|| {
        warn!(theme = %config.funnel.theme, "Unknown funnel theme, falling back to classic");
        FunnelTheme::default()
    });
    let presenter = Arc::new(FunnelPresenter::new(theme));

    // Start API server
    let api_server = ApiServer::new(config.clone(), funnel, presenter);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Commerce Pulse is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
