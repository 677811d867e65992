//! Upstream relay subsystem.
//!
//! # Data Flow
//! ```text
//! Route handler
//!     → client.rs (build outbound request, send to upstream)
//!     → upstream service responds (any status)
//!     → reply.rs (tag body: parsed JSON or raw text)
//!     → handler relays status + tagged body to the caller
//! ```
//!
//! # Design Decisions
//! - Non-2xx upstream statuses are not errors here; they are relayed
//!   verbatim. Only transport failures surface as `UpstreamError`.
//! - No outbound timeout is configured: a hung upstream hangs the
//!   corresponding inbound request.

pub mod client;
pub mod reply;

pub use client::{UpstreamClient, UpstreamError};
pub use reply::{RelayBody, UpstreamReply};
