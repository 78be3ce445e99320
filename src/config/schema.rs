//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! exporter. All types derive Serde traits for deserialization from config
//! files.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::checks::pause::PauseRange;

/// Root configuration for the exporter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address on which the exposition endpoint listens.
    pub listen_address: String,

    /// Port on which the exposition endpoint listens.
    pub listen_port: u16,

    /// The configured checks.
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// One configured check, dispatched on the `type` field.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CheckConfig {
    /// HTTP/HTTPS status check.
    Http(HttpCheckConfig),

    /// SMTP greeting check.
    SmtpHelo(SmtpCheckConfig),

    /// TLS handshake check.
    Tls(TlsCheckConfig),
}

impl CheckConfig {
    /// The check's target URL.
    pub fn url(&self) -> &Url {
        match self {
            CheckConfig::Http(c) => &c.url,
            CheckConfig::SmtpHelo(c) => &c.url,
            CheckConfig::Tls(c) => &c.url,
        }
    }
}

/// HTTP check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpCheckConfig {
    /// Target URL (http or https).
    pub url: Url,

    /// Minimum pause between requests, in seconds.
    #[serde(default = "default_pause_minimum_secs")]
    pub pause_minimum_secs: u64,

    /// Maximum pause between requests, in seconds.
    #[serde(default = "default_pause_maximum_secs")]
    pub pause_maximum_secs: u64,
}

/// SMTP check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpCheckConfig {
    /// Target address (host plus optional port; port 25 when absent).
    pub url: Url,

    /// Greeting sent in the `EHLO` command.
    pub helo: String,

    /// Minimum pause between requests, in seconds.
    #[serde(default = "default_pause_minimum_secs")]
    pub pause_minimum_secs: u64,

    /// Maximum pause between requests, in seconds.
    #[serde(default = "default_pause_maximum_secs")]
    pub pause_maximum_secs: u64,
}

/// TLS check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsCheckConfig {
    /// Target address. Must carry an explicit port.
    pub url: Url,

    /// Minimum pause between handshakes, in seconds.
    #[serde(default = "default_pause_minimum_secs")]
    pub pause_minimum_secs: u64,

    /// Maximum pause between handshakes, in seconds.
    #[serde(default = "default_pause_maximum_secs")]
    pub pause_maximum_secs: u64,
}

fn default_pause_minimum_secs() -> u64 {
    60
}

fn default_pause_maximum_secs() -> u64 {
    600
}

impl HttpCheckConfig {
    /// The check's pause interval, with the maximum clamped up to the
    /// minimum when the configured values are inverted.
    pub fn pause(&self) -> PauseRange {
        PauseRange::new(
            Duration::from_secs(self.pause_minimum_secs),
            Duration::from_secs(self.pause_maximum_secs),
        )
    }
}

impl SmtpCheckConfig {
    /// The check's pause interval, with the maximum clamped up to the
    /// minimum when the configured values are inverted.
    pub fn pause(&self) -> PauseRange {
        PauseRange::new(
            Duration::from_secs(self.pause_minimum_secs),
            Duration::from_secs(self.pause_maximum_secs),
        )
    }
}

impl TlsCheckConfig {
    /// The check's pause interval, with the maximum clamped up to the
    /// minimum when the configured values are inverted.
    pub fn pause(&self) -> PauseRange {
        PauseRange::new(
            Duration::from_secs(self.pause_minimum_secs),
            Duration::from_secs(self.pause_maximum_secs),
        )
    }
}
