//! Check execution subsystem.
//!
//! # Data Flow
//! ```text
//! CheckConfig (validated)
//!     → runner.rs spawns one loop per check
//!     → http.rs / smtp.rs / tls.rs perform the network interaction
//!     → each iteration writes one StatusRecord into the status store
//!
//! Shutdown signal
//!     → interrupts the current pause or network call
//!     → loop exits without writing a final record
//! ```
//!
//! # Design Decisions
//! - Each check pauses a random duration before probing, jittering
//!   concurrent checks against each other
//! - Failures become failure records and the loop continues; there is no
//!   retry counter, no backoff escalation, no failure threshold
//! - Checks only ever touch shared state through the status store

pub mod http;
pub mod pause;
pub mod runner;
pub mod smtp;
pub mod tls;

pub use http::HttpCheck;
pub use pause::PauseRange;
pub use runner::CheckRunner;
pub use smtp::SmtpHeloCheck;
pub use tls::TlsCheck;
