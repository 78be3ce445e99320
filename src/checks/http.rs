//! HTTP reachability check.
//!
//! # Responsibilities
//! - Issue a GET against the target, following redirects
//! - Record the status code verbatim, whatever it is
//! - Record transport-level failures with their message

use std::sync::Arc;

use reqwest::header;
use tokio::sync::broadcast;
use tokio::time;
use url::Url;

use crate::checks::pause::PauseRange;
use crate::status::{StatusRecord, StatusStore};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A periodic HTTP status check against one target URL.
pub struct HttpCheck {
    url: Url,
    pause: PauseRange,
    store: Arc<StatusStore>,
    client: reqwest::Client,
}

impl HttpCheck {
    pub fn new(url: Url, pause: PauseRange, store: Arc<StatusStore>) -> Self {
        // Default client policy follows redirects, which is what we want.
        let client = reqwest::Client::new();
        Self {
            url,
            pause,
            store,
            client,
        }
    }

    /// Run the check loop until the shutdown signal arrives.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(target = %self.url, kind = "http", "Check started");

        // Seed the target into the store so it appears on the exposition
        // feed before the first observation completes.
        self.store
            .record(StatusRecord::Http {
                target: self.url.clone(),
                code: 0,
                failure: None,
            })
            .await;

        loop {
            let pause = self.pause.sample();
            tracing::debug!(target = %self.url, pause = ?pause, "Pausing");
            tokio::select! {
                _ = shutdown.recv() => break,
                _ = time::sleep(pause) => {}
            }

            tokio::select! {
                _ = shutdown.recv() => break,
                record = self.request() => self.store.record(record).await,
            }
        }

        tracing::info!(target = %self.url, kind = "http", "Check stopped");
    }

    async fn request(&self) -> StatusRecord {
        tracing::debug!(target = %self.url, "Sending request");

        let response = self
            .client
            .get(self.url.clone())
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await;

        match response {
            Ok(response) => {
                let code = response.status().as_u16();
                drop(response);

                if code >= 400 {
                    tracing::error!(target = %self.url, status = code, "Request received an error");
                } else {
                    tracing::info!(target = %self.url, status = code, "Request succeeded");
                }

                StatusRecord::Http {
                    target: self.url.clone(),
                    code,
                    failure: None,
                }
            }
            Err(e) => {
                tracing::error!(target = %self.url, error = %e, "Request failed");
                StatusRecord::Http {
                    target: self.url.clone(),
                    code: 0,
                    failure: Some(e.to_string()),
                }
            }
        }
    }
}
