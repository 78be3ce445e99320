//! Process lifecycle: shutdown coordination and termination signals.
//!
//! # Data Flow
//! ```text
//! SIGTERM / Ctrl-C
//!     → wait_for_termination() resolves
//!     → Shutdown::trigger() broadcasts to every subscriber
//!     → check loops and the metrics server exit their loops
//! ```

use tokio::sync::broadcast;

/// Coordinator for cooperative shutdown.
///
/// Long-running tasks subscribe before starting and race their suspension
/// points against the broadcast signal.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a termination request from the operating system.
///
/// Resolves on Ctrl-C everywhere, and additionally on SIGTERM on Unix so
/// the exporter stops cleanly under process supervisors.
pub async fn wait_for_termination() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
