//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the page Router with all handlers
//! - Wrap it in the locale routing middleware so rewrites happen before
//!   route matching
//! - Wire up cross-cutting layers (request ID, tracing, timeout)
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::PortalConfig;
use crate::http::pages;
use crate::http::request::UuidRequestId;
use crate::routing::{locale_routing, RoutingSettings};

/// HTTP server for the portal.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            router: build_app(config),
        }
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Page routes, matched after locale routing has run.
fn page_router() -> Router {
    Router::new()
        .route("/health", get(pages::health))
        .route("/api/translate", get(pages::translate))
        .route("/{locale}", get(pages::home_page))
        .route("/{locale}/{category}", get(pages::category_page))
        .route("/{locale}/{category}/{tool}", get(pages::tool_page))
        .fallback(pages::not_found)
}

/// Build the Axum application with all middleware layers.
///
/// The page router sits behind a fallback so the locale middleware sees the
/// request before any route is matched and its rewrites take effect.
#[allow(deprecated)]
pub fn build_app(config: &PortalConfig) -> Router {
    let routing = Arc::new(RoutingSettings::from_config(&config.routing));

    Router::new()
        .fallback_service(page_router())
        .layer(middleware::from_fn_with_state(routing, locale_routing))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
}
