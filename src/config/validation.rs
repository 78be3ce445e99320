//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate check targets (schemes, hosts, the TLS port requirement)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the parsed config
//! - An invalid config is rejected before any check starts; there is no
//!   partial operation with a subset of valid checks

use thiserror::Error;

use crate::config::schema::{CheckConfig, ServerConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("check {index} ({url}): HTTP checks require an http or https URL")]
    HttpScheme { index: usize, url: String },

    #[error("check {index} ({url}): target URL carries no host")]
    MissingHost { index: usize, url: String },

    #[error("check {index} ({url}): TLS checks require an explicit port")]
    MissingTlsPort { index: usize, url: String },

    #[error("check {index} ({url}): HELO greeting must not be empty")]
    EmptyHelo { index: usize, url: String },
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, check) in config.checks.iter().enumerate() {
        let url = check.url().to_string();
        match check {
            CheckConfig::Http(c) => {
                if !matches!(c.url.scheme(), "http" | "https") {
                    errors.push(ValidationError::HttpScheme { index, url });
                }
            }
            CheckConfig::SmtpHelo(c) => {
                if c.url.host_str().is_none() {
                    errors.push(ValidationError::MissingHost {
                        index,
                        url: url.clone(),
                    });
                }
                if c.helo.is_empty() {
                    errors.push(ValidationError::EmptyHelo { index, url });
                }
            }
            CheckConfig::Tls(c) => {
                if c.url.host_str().is_none() {
                    errors.push(ValidationError::MissingHost {
                        index,
                        url: url.clone(),
                    });
                }
                if c.url.port().is_none() {
                    errors.push(ValidationError::MissingTlsPort { index, url });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
