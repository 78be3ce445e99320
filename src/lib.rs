//! Blackbox health-check exporter.
//!
//! A list of configured probes (HTTP reachability, SMTP greeting, TLS
//! handshake) is re-executed continuously, each on its own randomized
//! schedule. The most recent result per target is kept in a shared status
//! store and rendered on demand into a text exposition feed for a
//! monitoring system to scrape.
//!
//! # Architecture Overview
//!
//! ```text
//! config file (TOML)
//!     → config (parse, validate)
//!     → checks::runner spawns one loop per check
//!         → checks::{http, smtp, tls} probe their targets
//!         → each iteration writes one record into status::StatusStore
//!
//! scrape request (GET /)
//!     → http::MetricsServer handler
//!     → StatusStore snapshot (ordered by target)
//!     → exposition::render → text/plain response
//! ```

// Core subsystems
pub mod checks;
pub mod config;
pub mod exposition;
pub mod status;

// Plumbing
pub mod http;
pub mod lifecycle;

pub use checks::CheckRunner;
pub use config::ServerConfig;
pub use http::MetricsServer;
pub use lifecycle::Shutdown;
pub use status::{StatusRecord, StatusStore};
