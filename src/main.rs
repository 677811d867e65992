//! store-admin: admin panel for the store's product and order services.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │               STORE-ADMIN                 │
//!                    │                                           │
//!   Browser ────────▶│  axum router ──┬──▶ /api/products ───────┼──▶ product-service
//!                    │                ├──▶ /api/orders ─────────┼──▶ order-service
//!   Browser ◀────────│  relay status  └──▶ static UI (public/)  │
//!                    │  + body                                   │
//!                    └──────────────────────────────────────────┘
//! ```
//!
//! The proxy owns no data and implements no business logic: it maps a fixed
//! set of local routes onto the two upstream APIs and relays whatever they
//! answer. Only transport failures (upstream unreachable) produce a
//! proxy-owned 500.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_admin::config;
use store_admin::http::HttpServer;
use store_admin::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "store_admin=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("store-admin v{} starting", env!("CARGO_PKG_VERSION"));

    // Read configuration once; base URLs are fixed for the process lifetime.
    let config = config::from_env()?;

    tracing::info!(
        port = config.listener.port,
        product_base = %config.upstreams.product_base,
        order_base = %config.upstreams.order_base,
        static_dir = %config.statics.dir,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
