//! Store Admin Proxy Library
//!
//! A thin admin-panel proxy built with Tokio and Axum. Every `/api` route
//! forwards to one of two upstream microservices (products, orders) and
//! relays the upstream status and body back to the browser; the same
//! process serves the static admin UI.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
