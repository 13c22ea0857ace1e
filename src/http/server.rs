//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the decision and introspection handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::OmniboxConfig;
use crate::http::handlers;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::intercept::Interceptor;
use crate::lifecycle::signals::shutdown_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub interceptor: Arc<Interceptor>,
}

/// HTTP front end for the interceptor.
pub struct HttpServer {
    router: Router,
    config: OmniboxConfig,
}

impl HttpServer {
    /// Create a new HTTP server around a compiled interceptor.
    pub fn new(config: OmniboxConfig, interceptor: Arc<Interceptor>) -> Self {
        let state = AppState { interceptor };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &OmniboxConfig, state: AppState) -> Router {
        Router::new()
            .route("/v1/decide", post(handlers::decide))
            .route("/v1/engines", get(handlers::get_engines))
            .route("/v1/tlds", get(handlers::get_tlds))
            .route("/v1/status", get(handlers::get_status))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
            )
    }

    /// Run the server until Ctrl+C or the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &OmniboxConfig {
        &self.config
    }
}
