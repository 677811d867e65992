//! Configuration schema definitions.
//!
//! All types derive Serde traits so the effective configuration can be
//! logged or dumped; values come from the environment via the loader.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Root configuration for the store-admin proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (local port).
    pub listener: ListenerConfig,

    /// Upstream service base URLs.
    pub upstreams: UpstreamConfig,

    /// Static UI asset serving.
    pub statics: StaticConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Local listen port (`PORT`).
    pub port: u16,
}

impl ListenerConfig {
    /// Bind address derived from the configured port.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 3001 }
    }
}

/// Base URLs of the two upstream services.
///
/// Each value is the full base of the resource collection; per-item calls
/// append `/{id}` to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Product service base URL (`PRODUCT_API_BASE`).
    pub product_base: String,

    /// Order service base URL (`ORDER_API_BASE`).
    pub order_base: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            product_base: "http://product-service:4000/api/products".to_string(),
            order_base: "http://order-service:4001/api/orders".to_string(),
        }
    }
}

/// Static asset serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Directory of UI assets served at the root path (`STATIC_DIR`).
    pub dir: String,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            dir: "public".to_string(),
        }
    }
}
