//! HTTP server subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, static fallback)
//!     → products.rs / orders.rs (route handlers)
//!     → [upstream relay] (upstream::client)
//!     → relay status + body to client
//! ```

pub mod orders;
pub mod products;
pub mod server;

pub use server::{AppState, HttpServer};
