//! Application startup and lifecycle management.

use crate::config::SearchConfig;
use crate::handlers::{health_check, index, metrics_endpoint, search};
use crate::services::metrics::init_metrics;
use crate::services::{GoogleSearchProvider, SearchProvider};
use axum::{middleware::from_fn, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SearchConfig>,
    pub provider: Arc<dyn SearchProvider>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(config: SearchConfig, provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
            metrics: init_metrics(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri().path(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application against the real Google provider.
    pub async fn build(config: SearchConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn SearchProvider> =
            Arc::new(GoogleSearchProvider::new(config.google.base_url.clone()));

        tracing::info!(
            base_url = %config.google.base_url,
            "Initialized Google Custom Search provider"
        );

        Self::build_with_provider(config, provider).await
    }

    /// Build the application with an explicit provider (port 0 = random port for testing).
    pub async fn build_with_provider(
        config: SearchConfig,
        provider: Arc<dyn SearchProvider>,
    ) -> Result<Self, AppError> {
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Search service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, provider),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
