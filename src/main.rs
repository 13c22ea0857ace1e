//! OpenNIC omnibox redirector service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser extension / network observer
//!         │  POST /v1/decide { url, origin_url?, initiator? }
//!         ▼
//!     ┌──────────┐    ┌────────────────┐    ┌─────────┐    ┌──────────┐
//!     │   http   │───▶│ EngineRegistry │───▶│ TldSet  │───▶│ Decision │
//!     │  server  │    │ (query lookup) │    │(classify)│   │          │
//!     └──────────┘    └────────────────┘    └─────────┘    └──────────┘
//!
//!     Startup: config (TOML) → templates parsed → registry + TLD set frozen
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use opennic_omnibox::config::{load_config, OmniboxConfig};
use opennic_omnibox::lifecycle::{build_interceptor, Shutdown};
use opennic_omnibox::observability::{logging, metrics};
use opennic_omnibox::HttpServer;

#[derive(Parser)]
#[command(name = "opennic-omnibox")]
#[command(about = "Redirects searches for OpenNIC domains straight to the domain", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "omnibox.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration, falling back to built-in defaults
    let config_found = args.config.exists();
    let config = if config_found {
        load_config(&args.config)?
    } else {
        OmniboxConfig::default()
    };

    logging::init_logging(&config.observability)?;
    tracing::info!("opennic-omnibox v{} starting", env!("CARGO_PKG_VERSION"));

    if !config_found {
        tracing::info!(path = ?args.config, "Config file not found, using defaults");
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        templates = config.engines.templates.len(),
        fixed_engines = config.engines.fixed.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let interceptor = Arc::new(build_interceptor(&config)?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, interceptor);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
