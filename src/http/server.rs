//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the fixed `/api` routes
//! - Serve static UI assets as the router fallback
//! - Wire up middleware (tracing, CORS, request ID)
//! - Run with graceful shutdown

use std::sync::Arc;

use axum::{
    routing::{get, patch, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::{orders, products};
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server for the admin panel.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let state = AppState {
            upstream: Arc::new(UpstreamClient::new(&config.upstreams)),
        };

        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router: API routes, static asset fallback, middleware.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/products",
                get(products::list).post(products::create),
            )
            .route(
                "/api/products/{id}",
                put(products::update).delete(products::remove),
            )
            .route("/api/orders", get(orders::list))
            .route("/api/orders/{id}/status", patch(orders::update_status))
            .route("/api/orders/{id}", patch(orders::update_status))
            .with_state(state)
            // ServeDir answers everything the API does not, index.html at "/".
            .fallback_service(ServeDir::new(&config.statics.dir))
            // No timeout layer: a hung upstream must hang the client request.
            .layer(CorsLayer::permissive())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

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
