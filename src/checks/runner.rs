//! Check scheduling and lifecycle.
//!
//! # Responsibilities
//! - Spawn one independent task per configured check
//! - Forward the shutdown signal to every check loop
//! - Wait for all loops to observe cancellation on shutdown

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::checks::http::HttpCheck;
use crate::checks::smtp::SmtpHeloCheck;
use crate::checks::tls::TlsCheck;
use crate::config::CheckConfig;
use crate::lifecycle::Shutdown;
use crate::status::StatusStore;

/// Owns the running check tasks.
///
/// Each check is an indefinitely running loop on its own task; checks are
/// fully independent and a failure inside one loop never reaches another.
/// The runner's only cross-cutting responsibility is cancellation.
pub struct CheckRunner {
    shutdown: Shutdown,
    tasks: Vec<JoinHandle<()>>,
}

impl CheckRunner {
    /// Spawn one task per configured check. Returns once all tasks have
    /// been scheduled; the tasks themselves run until shutdown.
    pub fn start(checks: &[CheckConfig], store: Arc<StatusStore>) -> Self {
        let shutdown = Shutdown::new();
        let mut tasks = Vec::with_capacity(checks.len());

        for check in checks {
            let rx = shutdown.subscribe();
            let store = store.clone();
            let task = match check {
                CheckConfig::Http(config) => {
                    let check = HttpCheck::new(config.url.clone(), config.pause(), store);
                    tokio::spawn(check.run(rx))
                }
                CheckConfig::SmtpHelo(config) => {
                    let check = SmtpHeloCheck::new(
                        config.url.clone(),
                        config.helo.clone(),
                        config.pause(),
                        store,
                    );
                    tokio::spawn(check.run(rx))
                }
                CheckConfig::Tls(config) => {
                    let check = TlsCheck::new(config.url.clone(), config.pause(), store);
                    tokio::spawn(check.run(rx))
                }
            };
            tasks.push(task);
        }

        tracing::info!(checks = tasks.len(), "Check runner started");
        Self { shutdown, tasks }
    }

    /// Number of running check tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when no checks are configured.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Request cancellation of every check loop and wait for all of them to
    /// observe it. Every suspension point in a check loop races the shutdown
    /// signal, so this completes promptly even mid-sleep or mid-connect.
    pub async fn shutdown(self) {
        self.shutdown.trigger();
        for task in self.tasks {
            // A panicked check task only loses its own loop.
            let _ = task.await;
        }
        tracing::info!("Check runner stopped");
    }
}
