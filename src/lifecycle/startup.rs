//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration and the static catalog
//! - Initialize metrics when enabled
//! - Bind the listener last, so traffic only arrives when ready
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - A malformed catalog is a build defect; the server refuses to start

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::catalog::{Catalog, RegistryError};
use crate::config::{validate_config, PortalConfig, ValidationError};
use crate::http::HttpServer;
use crate::observability::metrics;

/// Error type for startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0:?}")]
    Config(Vec<ValidationError>),
    #[error("catalog integrity check failed: {0:?}")]
    Catalog(Vec<RegistryError>),
    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run every pre-flight check that does not touch the network.
pub fn preflight(config: &PortalConfig) -> Result<(), StartupError> {
    validate_config(config).map_err(StartupError::Config)?;

    let catalog = Catalog::get();
    catalog.validate().map_err(StartupError::Catalog)?;
    tracing::info!(
        categories = catalog.categories().len(),
        tools = catalog.tools().len(),
        "Catalog validated"
    );
    Ok(())
}

/// Validate, initialize subsystems and bind the listener.
pub async fn bootstrap(config: PortalConfig) -> Result<(HttpServer, TcpListener), StartupError> {
    preflight(&config)?;

    if config.observability.metrics_enabled {
        // Validated by preflight.
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            metrics::init_metrics(addr)?;
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listener.bind_address.clone(),
            source,
        })?;

    Ok((HttpServer::new(&config), listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preflight_accepts_defaults() {
        assert!(preflight(&PortalConfig::default()).is_ok());
    }

    #[test]
    fn test_preflight_rejects_bad_config() {
        let mut config = PortalConfig::default();
        config.timeouts.request_secs = 0;
        assert!(matches!(preflight(&config), Err(StartupError::Config(_))));
    }

    #[tokio::test]
    async fn test_bootstrap_binds_ephemeral_port() {
        let mut config = PortalConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        let (_server, listener) = bootstrap(config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
