//! Localized tool portal (v1)
//!
//! An HTTP front-end for a catalog of small browser tools, served in Polish
//! at the site root and in English under `/en`.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────────┐
//!                      │                     TOOL PORTAL                      │
//!                      │                                                      │
//!   Client Request     │  ┌──────────┐   ┌───────────────┐   ┌────────────┐   │
//!   ───────────────────┼─▶│   http   │──▶│    routing    │──▶│   pages    │   │
//!                      │  │ layers   │   │  middleware   │   │  handlers  │   │
//!                      │  └──────────┘   └───────┬───────┘   └─────┬──────┘   │
//!                      │                   301 / │ rewrite         │          │
//!                      │                         ▼                 ▼          │
//!                      │                 ┌──────────────────────────────┐     │
//!                      │                 │   catalog (registry, slugs)  │     │
//!                      │                 │   locale (codes, strings)    │     │
//!                      │                 └──────────────────────────────┘     │
//!                      │                                                      │
//!                      │  config · observability · lifecycle                  │
//!                      └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use tool_portal::config::{load_config, PortalConfig};
use tool_portal::lifecycle::{bootstrap, signals, Shutdown};
use tool_portal::observability::logging;

#[derive(Parser)]
#[command(name = "tool-portal")]
#[command(about = "Localized tool portal server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PortalConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_filter);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tool-portal starting");
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let (server, listener) = bootstrap(config).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
