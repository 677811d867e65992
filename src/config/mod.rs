//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variables (+ optional .env)
//!     → loader.rs (read once at startup, validate base URLs)
//!     → schema.rs typed config
//!     → frozen for the process lifetime (no reload, no per-request reads)
//! ```

pub mod loader;
pub mod schema;

pub use loader::{from_env, ConfigError};
pub use schema::{ListenerConfig, ProxyConfig, StaticConfig, UpstreamConfig};
