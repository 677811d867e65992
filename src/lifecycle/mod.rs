//! Process lifecycle management.
//!
//! # Data Flow
//! ```text
//! Ctrl+C (or a test calling trigger())
//!     → Shutdown broadcast
//!     → server stops accepting, in-flight requests drain
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
