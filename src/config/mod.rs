//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared read-only with the runner and its check loops
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it is parsed exactly once at startup
//! - Pause bounds have defaults so minimal check entries stay short
//! - Validation separates syntactic (serde) from semantic checks
//! - A config with any invalid check aborts startup entirely

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CheckConfig, HttpCheckConfig, ServerConfig, SmtpCheckConfig, TlsCheckConfig};
pub use validation::{validate_config, ValidationError};
