use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use helpline_core::{
    create_strategy, load_config, validate_config, Config, ConsoleSink, TicketQueue,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("helpline {}", VERSION);

    // Determine config path
    let config_path = std::env::var("HELPLINE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; the demo runs with defaults when no file exists
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No configuration file at {:?}, using defaults", config_path);
        Config::default()
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    // Register metrics
    let registry = prometheus::Registry::new();
    for metric in helpline_core::metrics::all_metrics() {
        registry
            .register(metric)
            .context("Failed to register metrics")?;
    }

    // Create the ordering strategy
    let strategy = create_strategy(&config.strategy);
    info!("Using ordering strategy: {}", strategy.name());

    // Register a few demonstration tickets
    let mut queue = TicketQueue::with_id_length(config.ticket.id_length);
    queue.submit("Jon Smith", "My computer makes strange sounds!");
    queue.submit("Linus", "I can't upload any videos, please help.");
    queue.submit("Arjan", "VSCode doesn't automatically solve my bugs.");
    info!("Submitted {} demonstration tickets", queue.len());

    // Process the tickets
    let mut sink = ConsoleSink::new();
    queue.process(strategy.as_ref(), &mut sink);

    debug!("Final metrics:\n{}", encode_metrics(&registry));

    Ok(())
}

/// Encode all registered metrics as Prometheus text format.
fn encode_metrics(registry: &prometheus::Registry) -> String {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    // Encoding into a Vec cannot fail
    let _ = encoder.encode(&registry.gather(), &mut buffer);
    String::from_utf8(buffer).unwrap_or_default()
}
