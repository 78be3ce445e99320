//! Exposition endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! GET /
//!     → server.rs handler
//!     → status store snapshot
//!     → exposition::render
//!     → text/plain response
//! ```
//!
//! One read-only route; no parameters, no state mutation.

pub mod server;

pub use server::MetricsServer;
